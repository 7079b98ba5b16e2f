use anyhow::Result;
use calstore::cli::{parse_args, print_help};
use calstore::config::Config;
use calstore::controller::EventController;
use calstore::logging::init_logging;
use calstore::model::{Event, EventData, RecurrenceKind, RecurrenceRule};
use chrono::{DateTime, TimeZone, Utc};
use std::env;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .ok_or_else(|| anyhow::anyhow!("Invalid timestamp {y}-{mo}-{d} {h}:{mi}:{s}"))
}

fn show(label: &str, event: &Event) -> Result<()> {
    println!("{} {}", label, serde_json::to_string_pretty(event)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args).map_err(|e| anyhow::anyhow!(e))?;

    if cli.help {
        print_help("calstore-demo");
        return Ok(());
    }

    let config = match &cli.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_logging(config.level_filter()?)?;

    let calendar = EventController::from_config(&config);

    let event = calendar
        .create_event(
            EventData::new("Event 1", at(2023, 9, 20, 10, 0, 0)?, at(2023, 9, 20, 11, 0, 0)?)
                .with_recurrence(RecurrenceRule::new(RecurrenceKind::Daily, 2).with_count(5)),
            false,
        )
        .await?;
    show("Initial Event:", &event)?;

    // Every 2 weeks
    match calendar
        .set_recurrence_rule(&event.id, RecurrenceRule::new(RecurrenceKind::Weekly, 2))
        .await
    {
        Ok(updated) => {
            println!("Recurring event rule updated successfully.");
            show("Updated event:", &updated)?;
        }
        Err(e) => eprintln!("Error updating recurring event rule: {}", e),
    }

    let overlapping = EventData::new(
        "Event 2",
        at(2023, 9, 20, 10, 30, 0)?,
        at(2023, 9, 20, 11, 30, 0)?,
    );
    match calendar.create_event(overlapping, false).await {
        Ok(created) => show("Event 2:", &created)?,
        Err(e) => println!("Event 2 rejected: {}", e),
    }

    let event3 = calendar
        .create_event(
            EventData::new("Event 3", at(2023, 9, 21, 14, 0, 0)?, at(2023, 9, 21, 15, 0, 0)?),
            true,
        )
        .await?;
    show("Event 3:", &event3)?;

    let in_range = calendar
        .list_events_in_range(at(2023, 9, 20, 0, 0, 0)?, at(2023, 9, 21, 23, 59, 59)?)
        .await;
    println!("Events in range: {}", serde_json::to_string_pretty(&in_range)?);

    let moved = EventData::new(
        "Updated Event 1",
        at(2023, 9, 20, 11, 30, 0)?,
        at(2023, 9, 20, 12, 30, 0)?,
    );
    match calendar.update_event(&event.id, moved.clone(), false).await {
        Ok(updated) => show("Updated Event (1):", &updated)?,
        Err(e) => println!("Updated Event (1) rejected: {}", e),
    }
    let moved = EventData {
        title: "Updated Event 2".to_string(),
        ..moved
    };
    match calendar.update_event(&event.id, moved, true).await {
        Ok(updated) => show("Updated Event (2):", &updated)?,
        Err(e) => println!("Updated Event (2) rejected: {}", e),
    }

    if let Some(first) = in_range.first() {
        println!("Deleting event {}", first.id);
        match calendar.delete_event(&first.id).await {
            Ok(deletion) => {
                println!("{}", deletion.message());
                println!(
                    "Remaining events: {}",
                    serde_json::to_string_pretty(&deletion.remaining)?
                );
            }
            Err(e) => println!("Delete failed: {}", e),
        }
    }

    println!("{}", calendar.export_ics().await);
    Ok(())
}
