//! Circuit elements: resistors and independent DC sources.

use crate::error::{Error, Result};

/// Source form token from the netlist (`dc` or `ac`).
///
/// Only DC operating-point analysis is performed; an `ac` source is
/// accepted by the grammar and contributes its amplitude as a DC value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceForm {
    Dc,
    Ac,
}

/// A resistor element.
#[derive(Debug, Clone)]
pub struct Resistor {
    /// Element name (e.g., "R1").
    pub name: String,
    /// Positive terminal node name.
    pub node_pos: String,
    /// Negative terminal node name.
    pub node_neg: String,
    /// Resistance value in ohms.
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(
        name: impl Into<String>,
        node_pos: impl Into<String>,
        node_neg: impl Into<String>,
        resistance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos: node_pos.into(),
            node_neg: node_neg.into(),
            resistance,
        }
    }

    /// Get the conductance (1/R).
    ///
    /// A zero-valued resistor has no finite conductance and is rejected
    /// rather than stamped as `inf`.
    pub fn conductance(&self) -> Result<f64> {
        if self.resistance == 0.0 {
            Err(Error::ZeroResistance(self.name.clone()))
        } else {
            Ok(1.0 / self.resistance)
        }
    }
}

/// An independent voltage source. Adds one branch-current unknown.
#[derive(Debug, Clone)]
pub struct VoltageSource {
    /// Element name (e.g., "V1").
    pub name: String,
    /// Positive terminal node name.
    pub node_pos: String,
    /// Negative terminal node name.
    pub node_neg: String,
    /// Source value in volts.
    pub value: f64,
    /// Source form token from the netlist.
    pub form: SourceForm,
}

impl VoltageSource {
    /// Create a new voltage source.
    pub fn new(
        name: impl Into<String>,
        node_pos: impl Into<String>,
        node_neg: impl Into<String>,
        value: f64,
        form: SourceForm,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos: node_pos.into(),
            node_neg: node_neg.into(),
            value,
            form,
        }
    }
}

/// An independent current source.
///
/// Current flows out of the positive terminal into the external circuit.
#[derive(Debug, Clone)]
pub struct CurrentSource {
    /// Element name (e.g., "I1").
    pub name: String,
    /// Positive terminal node name.
    pub node_pos: String,
    /// Negative terminal node name.
    pub node_neg: String,
    /// Source value in amperes.
    pub value: f64,
    /// Source form token from the netlist.
    pub form: SourceForm,
}

impl CurrentSource {
    /// Create a new current source.
    pub fn new(
        name: impl Into<String>,
        node_pos: impl Into<String>,
        node_neg: impl Into<String>,
        value: f64,
        form: SourceForm,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos: node_pos.into(),
            node_neg: node_neg.into(),
            value,
            form,
        }
    }
}

/// A parsed circuit element.
///
/// The grammar admits exactly three element kinds, so elements are a
/// closed tagged enum; all downstream logic matches on the tag instead of
/// re-deriving the kind from the name.
#[derive(Debug, Clone)]
pub enum Element {
    Resistor(Resistor),
    VoltageSource(VoltageSource),
    CurrentSource(CurrentSource),
}

impl Element {
    /// Get the element's name.
    pub fn name(&self) -> &str {
        match self {
            Element::Resistor(r) => &r.name,
            Element::VoltageSource(v) => &v.name,
            Element::CurrentSource(i) => &i.name,
        }
    }

    /// Positive and negative terminal node names.
    pub fn nodes(&self) -> (&str, &str) {
        match self {
            Element::Resistor(r) => (&r.node_pos, &r.node_neg),
            Element::VoltageSource(v) => (&v.node_pos, &v.node_neg),
            Element::CurrentSource(i) => (&i.node_pos, &i.node_neg),
        }
    }

    /// Check whether this element adds a branch-current unknown.
    pub fn is_voltage_source(&self) -> bool {
        matches!(self, Element::VoltageSource(_))
    }
}
