//! Diagram serialization (§4.9, §6): tab-separated plain text and a
//! JSON document, both capable of round-tripping `+infinity`.
//!
//! Aleph's own on-disk formats (`include/aleph/topology/io/*`) are out
//! of scope; the JSON document here is an **ambient addition** for the
//! diagram *model itself*, built on `serde`/`serde_json`, which the
//! teacher's crate already depends on (its `BiMapSequential` already
//! derives `Serialize, Deserialize` in `utilities/sequences_and_
//! ordinals.rs`).

use super::{Diagram, Point};
use crate::error::{Error, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

fn format_value<T: Float + Display>(v: T) -> String {
    if v.is_infinite() {
        if v.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        }
    } else {
        v.to_string()
    }
}

fn parse_value<T: Float + FromStr>(token: &str, line: usize) -> Result<T> {
    match token.trim() {
        "inf" | "+inf" | "Infinity" | "+Infinity" => Ok(T::infinity()),
        "-inf" | "-Infinity" => Ok(T::neg_infinity()),
        other => other.parse::<T>().map_err(|_| Error::ParseError {
            line,
            message: format!("not a number: {:?}", other),
        }),
    }
}

impl<T: Float + Display> Diagram<T> {
    /// Plain-text form: one `x\ty` line per point, infinities written
    /// as `inf`/`-inf`. A leading `# dimension <k>` comment records
    /// the dimension tag.
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("# dimension {}\n", self.dimension());
        for point in self.points() {
            out.push_str(&format_value(point.birth));
            out.push('\t');
            out.push_str(&format_value(point.death));
            out.push('\n');
        }
        out
    }
}

impl<T: Float + FromStr> Diagram<T> {
    /// Parse a plain-text diagram previously written by
    /// `to_plain_text`. Comment lines (`#...`) are skipped except for
    /// a `# dimension <k>` line, which sets the result's dimension tag
    /// (defaulting to 0 if absent).
    pub fn from_plain_text(text: &str) -> Result<Self> {
        let mut dimension = 0;
        let mut points = Vec::new();

        for (lineno, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix('#') {
                if let Some(value) = rest.trim().strip_prefix("dimension") {
                    dimension = value.trim().parse::<usize>().map_err(|_| Error::ParseError {
                        line: lineno,
                        message: format!("bad dimension comment: {:?}", rest),
                    })?;
                }
                continue;
            }

            let mut fields = line.split('\t');
            let x = fields.next().ok_or_else(|| Error::ParseError {
                line: lineno,
                message: "missing birth field".to_string(),
            })?;
            let y = fields.next().ok_or_else(|| Error::ParseError {
                line: lineno,
                message: "missing death field".to_string(),
            })?;

            points.push(Point {
                birth: parse_value(x, lineno)?,
                death: parse_value(y, lineno)?,
            });
        }

        Ok(Diagram { dimension, points })
    }
}

/// The JSON wire shape: points are emitted as `[x, y]` string pairs so
/// infinities survive the round trip (spec.md §4.9).
#[derive(Debug, Serialize, Deserialize)]
struct DiagramDocument {
    betti: usize,
    dimension: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    size: usize,
    diagram: Vec<(String, String)>,
}

impl<T: Float + Display> Diagram<T> {
    pub fn to_json(&self, name: Option<String>) -> Result<String> {
        let doc = DiagramDocument {
            betti: self.betti(),
            dimension: self.dimension(),
            name,
            size: self.len(),
            diagram: self
                .points()
                .iter()
                .map(|p| (format_value(p.birth), format_value(p.death)))
                .collect(),
        };
        serde_json::to_string(&doc).map_err(|e| Error::ParseError {
            line: 0,
            message: e.to_string(),
        })
    }
}

impl<T: Float + FromStr> Diagram<T> {
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: DiagramDocument = serde_json::from_str(json).map_err(|e| Error::ParseError {
            line: 0,
            message: e.to_string(),
        })?;

        let mut points = Vec::with_capacity(doc.diagram.len());
        for (lineno, (x, y)) in doc.diagram.into_iter().enumerate() {
            points.push(Point {
                birth: parse_value(&x, lineno)?,
                death: parse_value(&y, lineno)?,
            });
        }

        Ok(Diagram {
            dimension: doc.dimension,
            points,
        })
    }
}
