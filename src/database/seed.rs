use crate::models::{Activity, ActivityCatalog};

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Basketball",
        "Learn basketball skills and compete in games",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["james@mergington.edu"],
    ),
    (
        "Tennis",
        "Tennis training and match play",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        12,
        &["alex@mergington.edu"],
    ),
    (
        "Drama Club",
        "Theater performances and acting workshops",
        "Wednesdays, 3:30 PM - 5:00 PM",
        25,
        &["grace@mergington.edu", "luke@mergington.edu"],
    ),
    (
        "Art Studio",
        "Painting, drawing, and sculpture techniques",
        "Fridays, 3:30 PM - 5:00 PM",
        18,
        &["natalie@mergington.edu"],
    ),
    (
        "Debate Team",
        "Competitive debate and public speaking",
        "Mondays and Thursdays, 3:30 PM - 4:30 PM",
        16,
        &["marcus@mergington.edu", "jessica@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Advanced math problem solving and competitions",
        "Tuesdays, 4:00 PM - 5:00 PM",
        20,
        &["ryan@mergington.edu"],
    ),
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

/// The fixed catalog loaded at startup and on reset.
pub fn seed_catalog() -> ActivityCatalog {
    let mut catalog = ActivityCatalog::new();
    for (name, description, schedule, max_participants, participants) in SEED {
        catalog.insert(
            name.to_string(),
            Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        );
    }
    catalog
}
