//! Stream filtering and predicate evaluation

use crate::host::JobLog;
use crate::probe::{comparison_string, StreamRecord};

use super::filter::{Condition, FilterConfig};

/// Narrow `streams` by type, channel count and language, then test the
/// configured property on what is left.
///
/// Returns `true` when the file matches. Each narrowing step that leaves no
/// streams ends the evaluation with `false`.
pub fn evaluate(streams: &[StreamRecord], config: &FilterConfig, log: &mut dyn JobLog) -> bool {
    let candidates = narrow(streams, config, log);
    if candidates.is_empty() {
        return false;
    }

    let mut results = candidates
        .iter()
        .enumerate()
        .map(|(position, stream)| check_stream(stream, stream.log_index(position), config, log));

    // Short-circuits like the quantifiers they implement.
    let matched = if config.condition.is_negative() {
        results.all(|ok| ok)
    } else {
        results.any(|ok| ok)
    };

    tracing::debug!(
        "{} over {} stream(s): {}",
        config.condition,
        candidates.len(),
        matched
    );
    matched
}

/// Apply the type, channel and language filters in order.
///
/// An empty result means a filter removed everything; the reason has been
/// logged already.
pub fn narrow<'a>(
    streams: &'a [StreamRecord],
    config: &FilterConfig,
    log: &mut dyn JobLog,
) -> Vec<&'a StreamRecord> {
    let mut candidates: Vec<&StreamRecord> = streams
        .iter()
        .filter(|s| config.stream_type.matches(&s.codec_type()))
        .collect();
    tracing::debug!(
        "type filter {}: {} of {} stream(s)",
        config.stream_type,
        candidates.len(),
        streams.len()
    );
    if candidates.is_empty() {
        log.log(&format!("No {} streams found in file", config.stream_type));
        return candidates;
    }

    if let Some(count) = config.channel_count {
        candidates.retain(|s| s.channels() == Some(count));
        tracing::debug!("channel filter {}: {} stream(s)", count, candidates.len());
        if candidates.is_empty() {
            log.log(&format!("No {}ch audio streams found in file", count));
            return candidates;
        }
    }

    if let Some(languages) = &config.languages {
        let wanted: Vec<String> = languages.iter().map(|l| l.to_lowercase()).collect();
        candidates.retain(|s| {
            s.language()
                .map(|lang| wanted.iter().any(|w| *w == lang))
                .unwrap_or(false)
        });
        tracing::debug!(
            "language filter {}: {} stream(s)",
            languages.join(","),
            candidates.len()
        );
        if candidates.is_empty() {
            log.log(&format!("No {} streams found in file", languages.join(",")));
        }
    }

    candidates
}

/// Test one stream against the condition.
///
/// A stream without the property never satisfies a positive condition and
/// always satisfies a negative one.
pub fn check_stream(
    stream: &StreamRecord,
    label: u64,
    config: &FilterConfig,
    log: &mut dyn JobLog,
) -> bool {
    let property = &config.property;
    let Some(prop) = stream.get(property).and_then(comparison_string) else {
        log.log(&format!("Stream {}: {} not found", label, property));
        return config.condition.is_negative();
    };
    let values = &config.values;

    match config.condition {
        Condition::Includes => match values.iter().find(|v| prop.contains(v.as_str())) {
            Some(val) => {
                log.log(&format!(
                    "Stream {}: {} \"{}\" includes \"{}\"",
                    label, property, prop, val
                ));
                true
            }
            None => false,
        },
        Condition::NotIncludes => match values.iter().find(|v| prop.contains(v.as_str())) {
            Some(val) => {
                log.log(&format!(
                    "Stream {}: {} \"{}\" includes \"{}\" - condition fails",
                    label, property, prop, val
                ));
                false
            }
            None => true,
        },
        Condition::Equals => match values.iter().find(|v| **v == prop) {
            Some(val) => {
                log.log(&format!(
                    "Stream {}: {} \"{}\" equals \"{}\"",
                    label, property, prop, val
                ));
                true
            }
            None => false,
        },
        Condition::NotEquals => match values.iter().find(|v| **v == prop) {
            Some(val) => {
                log.log(&format!(
                    "Stream {}: {} \"{}\" equals \"{}\" - condition fails",
                    label, property, prop, val
                ));
                false
            }
            None => true,
        },
    }
}
