//! Netlist: an ordered element list with a deterministic node layout.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::mna::MnaSystem;
use crate::node::NodeMap;

/// A complete parsed circuit, ready for MNA assembly.
///
/// Elements are held with all voltage sources first, original relative
/// order preserved within each group; the source at position `p` owns
/// auxiliary row `num_unknowns + p` of the assembled system, and result
/// mapping relies on that same order. Node indices are assigned once from
/// the full set of names, so matrix layout does not depend on the order
/// elements appeared in the input.
#[derive(Debug, Clone)]
pub struct Netlist {
    elements: Vec<Element>,
    nodes: NodeMap,
    num_vsources: usize,
}

impl Netlist {
    /// Build a netlist from parsed elements.
    pub fn new(elements: Vec<Element>) -> Self {
        let nodes = NodeMap::from_names(elements.iter().flat_map(|e| {
            let (pos, neg) = e.nodes();
            [pos.to_string(), neg.to_string()]
        }));

        // Stable partition: voltage sources take the trailing block of
        // auxiliary unknowns in their original relative order.
        let (mut elements, rest): (Vec<_>, Vec<_>) =
            elements.into_iter().partition(Element::is_voltage_source);
        let num_vsources = elements.len();
        elements.extend(rest);

        Self {
            elements,
            nodes,
            num_vsources,
        }
    }

    /// Get the elements, voltage sources first.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get the node-name map.
    pub fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    /// Number of elements.
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Number of voltage sources (branch-current unknowns).
    pub fn num_vsources(&self) -> usize {
        self.num_vsources
    }

    /// Number of node-voltage unknowns (ground excluded).
    pub fn num_unknowns(&self) -> usize {
        self.nodes.num_unknowns()
    }

    /// Names of the voltage sources in auxiliary-row order.
    pub fn voltage_source_names(&self) -> impl Iterator<Item = &str> {
        self.elements[..self.num_vsources].iter().map(Element::name)
    }

    /// Assemble the MNA coefficient matrix and RHS vector.
    pub fn assemble_mna(&self) -> Result<MnaSystem> {
        let mut mna = MnaSystem::new(self.num_unknowns(), self.num_vsources);
        let mut next_branch = 0;

        for element in &self.elements {
            let (pos, neg) = element.nodes();
            let i = self.index_of(pos)?;
            let j = self.index_of(neg)?;

            match element {
                Element::Resistor(r) => mna.stamp_conductance(i, j, r.conductance()?),
                Element::VoltageSource(v) => {
                    mna.stamp_voltage_source(i, j, next_branch, v.value);
                    next_branch += 1;
                }
                Element::CurrentSource(c) => mna.stamp_current_source(i, j, c.value),
            }
        }

        Ok(mna)
    }

    fn index_of(&self, name: &str) -> Result<Option<usize>> {
        let id = self
            .nodes
            .get(name)
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))?;
        Ok(id.matrix_index())
    }
}
