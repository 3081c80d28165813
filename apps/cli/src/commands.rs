use anyhow::{Context, Result};
use clap::ValueEnum;
use sassbridge_coerce::{cast_to_native_with, cast_to_sass, map_to_object, NativeValue};
use sassbridge_units::{Dimension, Units};
use sassbridge_value::{fingerprint, SassMap};
use serde_json::Value as JsonValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Cmp,
}

fn parse_json(input: &str) -> Result<JsonValue> {
    serde_json::from_str(input).with_context(|| format!("Invalid JSON: {input}"))
}

/// JSON -> host value -> tagged value.
pub fn cast(input: &str, show_fingerprint: bool) -> Result<String> {
    let json = parse_json(input)?;
    let tagged = cast_to_sass(&NativeValue::from(&json)).context("Failed to cast value")?;
    tracing::debug!(value = %tagged, "cast");
    if show_fingerprint {
        Ok(fingerprint(&tagged))
    } else {
        Ok(format!("{tagged} ({})", tagged.type_of()))
    }
}

/// JSON -> tagged value -> host value -> JSON, with maps read back as plain
/// objects.
pub fn roundtrip(input: &str) -> Result<String> {
    let json = parse_json(input)?;
    let tagged = cast_to_sass(&NativeValue::from(&json)).context("Failed to cast value")?;
    let native = cast_to_native_with(&tagged, &|m: &SassMap| {
        NativeValue::Object(map_to_object(m))
    });
    let back = native.to_json().context("Failed to convert back to JSON")?;
    Ok(serde_json::to_string_pretty(&back)?)
}

pub fn calc(lhs: &str, op: Op, rhs: &str) -> Result<String> {
    let lhs: Dimension = lhs
        .parse()
        .with_context(|| format!("Invalid left operand: {lhs}"))?;
    let rhs: Dimension = rhs
        .parse()
        .with_context(|| format!("Invalid right operand: {rhs}"))?;

    let result = match op {
        Op::Add => lhs.add(&rhs)?.to_string(),
        Op::Sub => lhs.subtract(&rhs)?.to_string(),
        Op::Mul => (&lhs * &rhs).to_string(),
        Op::Div => (&lhs / &rhs).to_string(),
        Op::Cmp => (lhs.compare_to(&rhs)? as i8).to_string(),
    };
    Ok(result)
}

/// Normalized form of a unit expression; unitless prints as an empty line.
pub fn unit(expr: &str) -> String {
    Units::parse(expr).normalized().to_string()
}
