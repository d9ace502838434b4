//! Rendering of parsed rules and per-object verdicts.

use std::io::{self, Write};

use filter_rules::{FilterDefinition, FilterOperation, FilterSet, RuleVerdict, SchemaObject};
use serde::Serialize;

use crate::object_spec::ObjectSpec;

#[derive(Serialize)]
struct VerdictReport {
    index: usize,
    rule: String,
    operation: FilterOperation,
    applies: bool,
}

#[derive(Serialize)]
struct ObjectReport<'a> {
    label: &'a str,
    object: &'a SchemaObject,
    verdicts: Vec<VerdictReport>,
}

/// Evaluates every rule against every object, in input order.
fn evaluate<'a>(set: &'a FilterSet, objects: &[ObjectSpec]) -> Vec<Vec<RuleVerdict<'a>>> {
    let objects: Vec<SchemaObject> = objects.iter().map(|spec| spec.object().clone()).collect();
    set.verdicts_all(&objects)
}

/// Writes each definition in canonical form, one per line.
pub(crate) fn write_definitions<W: Write>(out: &mut W, set: &FilterSet) -> io::Result<()> {
    for definition in set.definitions() {
        writeln!(out, "{definition}")?;
    }
    Ok(())
}

/// Writes every definition as a JSON array.
pub(crate) fn write_definitions_json<W: Write>(out: &mut W, set: &FilterSet) -> io::Result<()> {
    let definitions: Vec<&FilterDefinition> = set.definitions().collect();
    serde_json::to_writer_pretty(&mut *out, &definitions)?;
    writeln!(out)
}

/// Writes one tab-separated line per object and rule:
/// `LABEL INDEX RULE APPLIES`.
pub(crate) fn write_verdicts<W: Write>(
    out: &mut W,
    set: &FilterSet,
    objects: &[ObjectSpec],
) -> io::Result<()> {
    for (spec, verdicts) in objects.iter().zip(evaluate(set, objects)) {
        for verdict in verdicts {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                spec.label(),
                verdict.index(),
                verdict.definition(),
                verdict.applies()
            )?;
        }
    }
    Ok(())
}

/// Writes the verdicts for every object as a JSON array.
pub(crate) fn write_verdicts_json<W: Write>(
    out: &mut W,
    set: &FilterSet,
    objects: &[ObjectSpec],
) -> io::Result<()> {
    let reports: Vec<ObjectReport<'_>> = objects
        .iter()
        .zip(evaluate(set, objects))
        .map(|(spec, verdicts)| ObjectReport {
            label: spec.label(),
            object: spec.object(),
            verdicts: verdicts
                .into_iter()
                .map(|verdict| VerdictReport {
                    index: verdict.index(),
                    rule: verdict.definition().to_string(),
                    operation: verdict.operation(),
                    applies: verdict.applies(),
                })
                .collect(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &reports)?;
    writeln!(out)
}
