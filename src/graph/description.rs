// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A textual description of a [`TopologyGraph`], for diagnostics.

use crate::TopologyGraph;

impl TopologyGraph {
    /// Returns a description of the graph in the `digraph` text format, with
    /// one line per edge.
    ///
    /// ```text
    /// digraph G {
    ///   "A" -> "B" [label="eq1"]
    /// }
    /// ```
    ///
    /// Node ids and labels are quoted verbatim.
    pub fn digraph_description(&self) -> String {
        let edges = self
            .connections()
            .map(|(a, b, label)| format!("  \"{a}\" -> \"{b}\" [label=\"{label}\"]\n"))
            .collect::<String>();
        format!("digraph G {{\n{edges}}}")
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TestModel;
    use crate::{EquipmentType, TopologyGraph};

    #[test]
    fn test_digraph_description() {
        let mut model = TestModel::chain();
        model.add_transformer("XAT/V220/T1", &[("D", Some("D_N")), ("E", None)]);
        let tg = TopologyGraph::new(&model);

        assert_eq!(
            tg.digraph_description(),
            concat!(
                "digraph G {\n",
                "  \"A\" -> \"B\" [label=\"eq1\"]\n",
                "  \"B\" -> \"C\" [label=\"eq2\"]\n",
                "  \"C\" -> \"D\" [label=\"eq3\"]\n",
                "  \"D\" -> \"E\" [label=\"XAT/V220/T1\"]\n",
                "  \"D\" -> \"D_N\" [label=\"Neutral\"]\n",
                "}"
            )
        );

        let tg = TopologyGraph::new(&TestModel::new());
        assert_eq!(tg.digraph_description(), "digraph G {\n}");

        let mut model = TestModel::new();
        model.add_equipment("G1", EquipmentType::Generator, &["CN1"]);
        assert_eq!(
            TopologyGraph::new(&model).digraph_description(),
            "digraph G {\n  \"G1\" -> \"CN1\" [label=\"G1\"]\n}"
        );
    }
}
