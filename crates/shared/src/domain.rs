use std::{fmt, str::FromStr};

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::error::UnknownTripField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripField {
    Age,
    Gender,
    Personality,
    Days,
    Origin,
    Destination,
}

/// How a field is edited, mirroring the constraints of the form widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Numeric { min: Option<i64> },
    SingleLine,
    MultiLine,
}

impl TripField {
    /// Form order.
    pub const ALL: [TripField; 6] = [
        TripField::Age,
        TripField::Gender,
        TripField::Personality,
        TripField::Days,
        TripField::Origin,
        TripField::Destination,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Personality => "personality",
            Self::Days => "days",
            Self::Origin => "origin",
            Self::Destination => "destination",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Personality => "Personality Traits",
            Self::Days => "Number of Days",
            Self::Origin => "Origin",
            Self::Destination => "Destination",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Age => InputKind::Numeric { min: None },
            Self::Days => InputKind::Numeric { min: Some(1) },
            Self::Personality => InputKind::MultiLine,
            Self::Gender | Self::Origin | Self::Destination => InputKind::SingleLine,
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Personality => Some("e.g. adventurous, loves nature, enjoys local cuisine"),
            _ => None,
        }
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TripField {
    type Err = UnknownTripField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TripField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownTripField(s.to_string()))
    }
}

/// Traveler preferences as typed into the form. Every value stays a string;
/// the planning service interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub age: String,
    pub gender: String,
    pub personality: String,
    pub days: String,
    pub origin: String,
    pub destination: String,
}

impl TripRequest {
    pub fn get(&self, field: TripField) -> &str {
        match field {
            TripField::Age => &self.age,
            TripField::Gender => &self.gender,
            TripField::Personality => &self.personality,
            TripField::Days => &self.days,
            TripField::Origin => &self.origin,
            TripField::Destination => &self.destination,
        }
    }

    pub fn set(&mut self, field: TripField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot_mut(&mut self, field: TripField) -> &mut String {
        match field {
            TripField::Age => &mut self.age,
            TripField::Gender => &mut self.gender,
            TripField::Personality => &mut self.personality,
            TripField::Days => &mut self.days,
            TripField::Origin => &mut self.origin,
            TripField::Destination => &mut self.destination,
        }
    }

    pub fn missing_fields(&self) -> impl Iterator<Item = TripField> + '_ {
        TripField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "why_its_suitable")]
    pub suitability: String,
    #[serde(default, alias = "rating")]
    pub reviews: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// Day plans keyed by day label, kept in the order the service sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    days: Vec<(String, DayPlan)>,
}

impl Itinerary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a day. A repeated key replaces the earlier plan but keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, plan: DayPlan) {
        let key = key.into();
        match self.days.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = plan,
            None => self.days.push((key, plan)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&DayPlan> {
        self.days
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, plan)| plan)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayPlan)> {
        self.days.iter().map(|(key, plan)| (key.as_str(), plan))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|(_, plan)| plan.activities.len()).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, DayPlan)> for Itinerary {
    fn from_iter<I: IntoIterator<Item = (K, DayPlan)>>(iter: I) -> Self {
        let mut itinerary = Itinerary::new();
        for (key, plan) in iter {
            itinerary.insert(key, plan);
        }
        itinerary
    }
}

impl Serialize for Itinerary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (key, plan) in &self.days {
            map.serialize_entry(key, plan)?;
        }
        map.end()
    }
}

struct ItineraryVisitor;

impl<'de> Visitor<'de> for ItineraryVisitor {
    type Value = Itinerary;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of day labels to day plans")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Itinerary, A::Error> {
        let mut itinerary = Itinerary::new();
        while let Some((key, plan)) = access.next_entry::<String, DayPlan>()? {
            itinerary.insert(key, plan);
        }
        Ok(itinerary)
    }
}

impl<'de> Deserialize<'de> for Itinerary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ItineraryVisitor)
    }
}
