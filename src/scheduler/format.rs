//! Channel name and raid command composition.
//!
//! Stored date patterns use the `yyyy-MM-dd` style the formatting options
//! were written in; they are translated to chrono strftime specifiers before
//! rendering. The raid command composer is the explicit contract for the
//! message a third-party raid bot consumes. The contract is string-level
//! only; there is no protocol beyond the format produced here.

use chrono::NaiveDate;

/// Default date pattern for scheduled channel names.
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd";

/// Raid time used when the trigger row has none stored.
pub const DEFAULT_RAID_TIME: &str = "20:00";

/// Translates a `yyyy-MM-dd`-style date pattern into a chrono format string.
///
/// Recognized tokens: `yyyy`/`yy`, `MMMM` (full month name), `MMM`
/// (abbreviated), `MM`/`M`, `dd`/`d`, `HH`, `mm`, `ss`. Unrecognized
/// characters pass through literally.
pub fn translate_date_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();

        let (spec, consumed) = match c {
            'y' => (if run == 2 { "%y" } else { "%Y" }, run),
            'M' => match run {
                4.. => ("%B", run),
                3 => ("%b", run),
                _ => ("%m", run),
            },
            'd' => ("%d", run),
            'H' => ("%H", run),
            'm' => ("%M", run),
            's' => ("%S", run),
            '%' => ("%%", run),
            _ => ("", 0),
        };

        if consumed > 0 {
            out.push_str(spec);
            i += consumed;
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

/// Builds a scheduled channel name as `{base}-{date}`.
///
/// `pattern` falls back to [`DEFAULT_DATE_FORMAT`] when absent.
pub fn channel_name(base: &str, date: NaiveDate, pattern: Option<&str>) -> String {
    let pattern = pattern.unwrap_or(DEFAULT_DATE_FORMAT);
    format!("{}-{}", base, date.format(&translate_date_pattern(pattern)))
}

/// Composes the raid-creation command string posted into the target channel:
///
/// `/raidhelper create [template:<id>] title:<name> <dd-MMMM-yyyy>
/// [description:<text>] time:<HH:MM>`
///
/// Optional clauses are omitted entirely when unset; the time clause falls
/// back to [`DEFAULT_RAID_TIME`].
pub fn raid_command(raid: &entity::raid_trigger_event::Model, date: NaiveDate) -> String {
    let mut command = String::from("/raidhelper create");

    if let Some(template_id) = &raid.template_id {
        command.push_str(&format!(" template:{}", template_id));
    }

    command.push_str(&format!(" title:{}", raid.title));
    command.push_str(&format!(" {}", date.format("%d-%B-%Y")));

    if let Some(description) = &raid.description {
        command.push_str(&format!(" description:{}", description));
    }

    let time = raid.raid_time.as_deref().unwrap_or(DEFAULT_RAID_TIME);
    command.push_str(&format!(" time:{}", time));

    command
}
