use chrono::{Days, NaiveDate};
use monthcal::{
    app::AppState,
    calendar::{EventColor, EventData},
};

pub fn add_sample_events(app: &mut AppState) {
    let today = app.today;
    let offset = |days: i64| -> Option<NaiveDate> {
        let step = Days::new(days.unsigned_abs());
        if days >= 0 {
            today.checked_add_days(step)
        } else {
            today.checked_sub_days(step)
        }
    };

    let events = [
        ("Morning Standup", 0, "09:00", EventColor::Blue, ""),
        ("Team Sync", 0, "14:00", EventColor::Green, "Conference Room A"),
        ("Code Review", 0, "16:30", EventColor::Purple, ""),
        ("Gym", 0, "", EventColor::Lime, ""),
        ("Sprint Planning", 1, "15:00", EventColor::Yellow, "Zoom"),
        ("1-on-1 with Manager", -1, "11:00", EventColor::Cyan, ""),
        ("Lunch with Team", -1, "12:30", EventColor::Pink, "Downtown Cafe"),
        ("Release Day", 9, "", EventColor::Red, "Ship it"),
    ];

    for (title, days, time, color, description) in events {
        let Some(date) = offset(days) else { continue };
        app.events.add_event(EventData {
            title: title.to_string(),
            date,
            time: time.to_string(),
            color,
            description: description.to_string(),
        });
    }

    tracing::debug!("Seeded {} sample events", app.events.len());
}
