/// Accumulates a Graphviz `digraph`, states being numbered nodes.
pub struct Dot {
    buffer: String,
}

impl Dot {
    pub fn new(name: &str) -> Dot {
        Dot {
            buffer: format!("digraph {} {{\n\trankdir = LR;\n", name),
        }
    }

    pub fn node(&mut self, id: usize, accepting: bool) {
        let shape = if accepting { "doublecircle" } else { "circle" };
        self.buffer
            .push_str(&format!("\t{} [label = \"{}\", shape = {}];\n", id, id, shape));
    }

    /// Point an invisible entry arrow toward the initial state.
    pub fn start(&mut self, id: usize) {
        self.buffer.push_str("\tinit [label = \"\", shape = none];\n");
        self.buffer.push_str(&format!("\tinit -> {};\n", id));
    }

    pub fn edge(&mut self, source: usize, target: usize, label: &str) {
        let label = label.replace('\\', "\\\\").replace('"', "\\\"");
        self.buffer
            .push_str(&format!("\t{} -> {} [label = \"{}\"];\n", source, target, label));
    }

    pub fn finish(mut self) -> String {
        self.buffer.push_str("}\n");
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let mut dot = Dot::new("g");
        dot.node(0, false);
        dot.node(1, true);
        dot.start(0);
        dot.edge(0, 1, "a\\b");

        assert_eq!(
            dot.finish(),
            "digraph g {\n\
             \trankdir = LR;\n\
             \t0 [label = \"0\", shape = circle];\n\
             \t1 [label = \"1\", shape = doublecircle];\n\
             \tinit [label = \"\", shape = none];\n\
             \tinit -> 0;\n\
             \t0 -> 1 [label = \"a\\\\b\"];\n\
             }\n"
        );
    }
}
