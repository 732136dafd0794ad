// SPDX-License-Identifier: GPL-3.0-or-later

//! Human-readable rendering of recognition outcomes.

use std::fmt::{self, Write};

use nowplaying_application::{Hints, RecognitionOutcome};

pub struct Scenario {
    pub name: &'static str,
    pub hints: Hints,
}

/// Partial-information cases that stay answerable even when the audio is
/// too degraded to fingerprint.
pub fn demo_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Classic Rock - Partial Info",
            hints: Hints::new().with_artist("Led Zeppelin").with_track("Stairway"),
        },
        Scenario {
            name: "Pop Music - Recent Hit",
            hints: Hints::new().with_artist("The Weeknd").with_track("Blinding"),
        },
        Scenario {
            name: "Classic Album",
            hints: Hints::new().with_album("Dark Side of the Moon"),
        },
        Scenario {
            name: "Vague Recognition",
            hints: Hints::new().with_track("Hotel California"),
        },
    ]
}

pub fn render_hints(hints: &Hints) -> String {
    let parts: Vec<String> = hints
        .values()
        .map(|(field, value)| format!("{}={:?}", field.search_field(), value))
        .collect();
    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn render_outcome(outcome: &RecognitionOutcome) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_outcome(&mut out, outcome);
    out
}

fn write_outcome(out: &mut impl Write, outcome: &RecognitionOutcome) -> fmt::Result {
    match outcome.best_match() {
        Some(best) => {
            writeln!(out, "Success using {} method", best.method)?;
            match best.data.count {
                Some(count) => writeln!(out, "   Found {count} matches")?,
                None => writeln!(out, "   Found unknown matches")?,
            }
            if let Some(top) = best.data.top_candidate() {
                writeln!(out, "   Top match: {} by {}", top.title, top.artist_display())?;
            }
        }
        None => {
            writeln!(out, "No matches found with any method")?;
            for attempt in outcome.attempts() {
                if let Some(error) = &attempt.error {
                    writeln!(out, "   {}: {}", attempt.method, error)?;
                }
            }
        }
    }

    let methods: Vec<&str> = outcome.methods_tried().iter().map(|m| m.as_str()).collect();
    writeln!(out, "   Methods tried: {}", methods.join(", "))
}
