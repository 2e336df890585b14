//! Line-oriented parser for `.circuit`/`.end` netlist blocks.

use ohmic_core::{CurrentSource, Element, Netlist, Resistor, SourceForm, VoltageSource};

use crate::error::{Error, Result};

/// Parse a netlist string into a [`Netlist`].
///
/// Lines before the `.circuit` marker are ignored; the first line starting
/// with `.end` stops processing. End-of-input also closes an open block.
/// Failing to find a `.circuit` line at all is a malformed-file error.
pub fn parse(input: &str) -> Result<Netlist> {
    let mut elements = Vec::new();
    let mut in_block = false;

    for (n, raw) in input.lines().enumerate() {
        let line = raw.trim();

        if line.starts_with(".circuit") {
            in_block = true;
            continue;
        }
        if line.starts_with(".end") {
            break;
        }
        if !in_block || line.is_empty() {
            continue;
        }

        elements.push(parse_element_line(line, n + 1)?);
    }

    if !in_block {
        return Err(Error::MissingCircuitBlock);
    }

    log::debug!("parsed {} circuit elements", elements.len());
    Ok(Netlist::new(elements))
}

/// Parse one in-block circuit statement.
///
/// Grammar: `name n+ n- value` for resistors, `name n+ n- dc|ac value` for
/// sources. Tokens past the grammar are ignored.
fn parse_element_line(line: &str, lineno: usize) -> Result<Element> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(Error::Grammar {
            line: lineno,
            message: format!("expected at least 4 fields, found {}", tokens.len()),
        });
    }

    let name = tokens[0];
    let node_pos = tokens[1];
    let node_neg = tokens[2];
    let kind = name.chars().next().unwrap_or(' ').to_ascii_uppercase();

    match kind {
        'R' => {
            let value = parse_value(tokens[3])?;
            Ok(Element::Resistor(Resistor::new(
                name, node_pos, node_neg, value,
            )))
        }
        'V' | 'I' => {
            let form = parse_source_form(tokens[3])?;
            let value_token = tokens.get(4).ok_or_else(|| Error::Grammar {
                line: lineno,
                message: "source line is missing its value field".into(),
            })?;
            let value = parse_value(value_token)?;

            if kind == 'V' {
                Ok(Element::VoltageSource(VoltageSource::new(
                    name, node_pos, node_neg, value, form,
                )))
            } else {
                Ok(Element::CurrentSource(CurrentSource::new(
                    name, node_pos, node_neg, value, form,
                )))
            }
        }
        _ => Err(Error::UnsupportedElement(name.to_string())),
    }
}

/// The form token is matched exactly; only `dc` has defined numeric
/// semantics, `ac` is accepted and evaluated at its amplitude.
fn parse_source_form(token: &str) -> Result<SourceForm> {
    match token {
        "dc" => Ok(SourceForm::Dc),
        "ac" => Ok(SourceForm::Ac),
        other => Err(Error::UnsupportedSourceForm(other.to_string())),
    }
}

fn parse_value(token: &str) -> Result<f64> {
    token
        .parse()
        .map_err(|_| Error::InvalidValue(token.to_string()))
}
