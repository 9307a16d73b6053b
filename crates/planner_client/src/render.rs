//! Read-only breakdown of an itinerary, one section per day.

use std::fmt;

use shared::domain::{Activity, DayPlan, Itinerary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryView {
    pub heading: String,
    pub summary: String,
    pub days: Vec<DaySection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    pub key: String,
    pub title: String,
    pub activities: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    /// 1-based position within the day.
    pub position: usize,
    pub name: String,
    pub details: Vec<ActivityDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDetail {
    pub label: &'static str,
    pub text: String,
}

pub fn render_itinerary(itinerary: &Itinerary, destination: &str) -> ItineraryView {
    let destination = destination.trim();
    let heading = if destination.is_empty() {
        "Your Trip Plan".to_string()
    } else {
        format!("Your Trip to {destination}")
    };

    ItineraryView {
        heading,
        summary: format!(
            "{}, {}",
            plural(itinerary.len(), "day"),
            plural(itinerary.activity_count(), "activity")
        ),
        days: itinerary
            .iter()
            .map(|(key, plan)| render_day(key, plan))
            .collect(),
    }
}

fn render_day(key: &str, plan: &DayPlan) -> DaySection {
    let title = plan.title.trim();
    DaySection {
        key: key.to_string(),
        title: if title.is_empty() { key } else { title }.to_string(),
        activities: plan
            .activities
            .iter()
            .enumerate()
            .map(|(index, activity)| render_activity(index + 1, activity))
            .collect(),
    }
}

fn render_activity(position: usize, activity: &Activity) -> ActivityEntry {
    let details = [
        ("Location", &activity.location),
        ("Description", &activity.description),
        ("Why it suits you", &activity.suitability),
        ("Reviews", &activity.reviews),
    ]
    .into_iter()
    .filter_map(|(label, text)| {
        let text = text.trim();
        (!text.is_empty()).then(|| ActivityDetail {
            label,
            text: text.to_string(),
        })
    })
    .collect();

    let name = activity.name.trim();
    ActivityEntry {
        position,
        name: if name.is_empty() {
            format!("Activity {position}")
        } else {
            name.to_string()
        },
        details,
    }
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "activity") => format!("{count} activities"),
        _ => format!("{count} {noun}s"),
    }
}

impl DaySection {
    /// Header line, e.g. `Day 1: Arrival`. Collapses to the key when the title repeats it.
    pub fn header(&self) -> String {
        if self.title == self.key {
            self.key.clone()
        } else {
            format!("{}: {}", self.key, self.title)
        }
    }
}

impl fmt::Display for ItineraryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "{}", self.summary)?;
        for day in &self.days {
            writeln!(f)?;
            writeln!(f, "{}", day.header())?;
            if day.activities.is_empty() {
                writeln!(f, "  (no activities planned)")?;
            }
            for activity in &day.activities {
                writeln!(f, "  {}. {}", activity.position, activity.name)?;
                for detail in &activity.details {
                    writeln!(f, "     {}: {}", detail.label, detail.text)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
