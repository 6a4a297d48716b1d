use minds_common::message::ChatMessage;
use minds_common::mock::PROMPT_SIGNATURE;
use minds_common::timezone::{
    mutual_awake_hours, HourClassification, OverlapWindow, Timezone, UtcHour,
};

const CITY_WIDTH: usize = 12;

fn cell_char(class: HourClassification) -> char {
    match class {
        HourClassification::Overlap => '#',
        HourClassification::Awake => '+',
        HourClassification::Asleep => '.',
    }
}

/// Text rendition of the overlap finder: one row per timezone, one cell per UTC hour.
pub fn overlap_grid(timezones: &[Timezone], window: &OverlapWindow) -> String {
    let axis: String = UtcHour::all()
        .map(|h| char::from(b'0' + h.get() % 10))
        .collect();
    let mut lines = vec![format!("{:<width$}{axis}", "UTC", width = CITY_WIDTH)];

    lines.extend(timezones.iter().map(|tz| {
        let row: String = tz
            .day_row(window)
            .iter()
            .map(|cell| cell_char(cell.classification()))
            .collect();
        format!("{:<width$}{row}", tz.city, width = CITY_WIDTH)
    }));

    lines.push("legend: # overlap  + awake  . asleep".to_string());
    lines.push(format!(
        "Optimal Meeting Window: {window} ({}h)",
        window.hours().count()
    ));

    let mutual = mutual_awake_hours(timezones);
    if mutual.is_empty() {
        lines.push("Everyone awake: none".to_string());
    } else {
        let hours: Vec<String> = mutual.iter().map(|h| h.to_string()).collect();
        lines.push(format!("Everyone awake: {} UTC", hours.join(", ")));
    }

    lines.join("\n") + "\n"
}

fn transcript_line(msg: &ChatMessage) -> String {
    if msg.is_prompt() {
        format!("    >> {} (- {PROMPT_SIGNATURE})", msg.body)
    } else {
        format!("[{}] {}: {}", msg.meta_label(), msg.author, msg.body)
    }
}

pub fn transcript<'a>(messages: impl IntoIterator<Item = &'a ChatMessage>) -> String {
    messages
        .into_iter()
        .map(|m| transcript_line(m) + "\n")
        .collect()
}
