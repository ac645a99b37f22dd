use super::ActivityDirectory;
use crate::models::Activity;

/// Fixed catalog the service starts with. A couple of students are
/// pre-enrolled in each activity so the front end has something to show.
pub fn seeded_directory() -> ActivityDirectory {
    let mut directory = ActivityDirectory::new();

    directory.insert(
        "Chess Club",
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    directory.insert(
        "Programming Class",
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    directory.insert(
        "Gym Class",
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    directory.insert(
        "Basketball Team",
        activity(
            "Practice basketball and compete against other schools",
            "Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["liam@mergington.edu", "ava@mergington.edu"],
        ),
    );
    directory.insert(
        "Tennis Club",
        activity(
            "Weekly tennis coaching and friendly matches on the school courts",
            "Tuesdays, 3:30 PM - 5:00 PM",
            10,
            &["noah@mergington.edu"],
        ),
    );
    directory.insert(
        "Art Studio",
        activity(
            "Painting, drawing and sculpture in the school studio",
            "Thursdays, 3:30 PM - 5:00 PM",
            16,
            &["amelia@mergington.edu", "lucas@mergington.edu"],
        ),
    );
    directory.insert(
        "Music Band",
        activity(
            "Rehearse with the school band and perform at school events",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            25,
            &["mia@mergington.edu"],
        ),
    );
    directory.insert(
        "Debate Team",
        activity(
            "Develop argumentation skills and compete in debate tournaments",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["ethan@mergington.edu", "isabella@mergington.edu"],
        ),
    );
    directory.insert(
        "Robotics Club",
        activity(
            "Design, build and program robots for regional competitions",
            "Saturdays, 10:00 AM - 12:00 PM",
            14,
            &["oliver@mergington.edu"],
        ),
    );

    directory
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|s| s.to_string()).collect(),
    }
}
