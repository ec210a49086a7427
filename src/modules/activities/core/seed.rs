// Initial dataset the registry starts from on every process start.

use crate::modules::activities::core::activity::{Activities, Activity};

pub fn seed_activities() -> Activities {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Competitive soccer practices and matches",
                "Mondays and Thursdays, 4:00 PM - 6:00 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Track and Field",
            Activity::new(
                "Running, jumping, and throwing events training",
                "Tuesdays, Thursdays, 4:00 PM - 5:30 PM",
                40,
            )
            .with_participants(["ava@mergington.edu", "isabella@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore drawing, painting, and mixed media",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["mia@mergington.edu", "charlotte@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Acting workshops and school theater productions",
                "Fridays, 4:00 PM - 6:00 PM",
                25,
            )
            .with_participants(["henry@mergington.edu", "lucas@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Practice formal debate, public speaking, and argumentation",
                "Mondays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(["grace@mergington.edu", "chloe@mergington.edu"]),
        ),
        (
            "Robotics Club",
            Activity::new(
                "Design, build, and program robots for competitions",
                "Tuesdays and Fridays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["jack@mergington.edu", "liam.s@mergington.edu"]),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
