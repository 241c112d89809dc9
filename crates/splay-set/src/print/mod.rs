//! Box-drawing tree dumps used by [`SplaySet::to_tree_string`](crate::SplaySet::to_tree_string).

/// Renders the binary tree under `root`, one node per line.
///
/// `children` yields the `[left, right]` slots of a node and `label` its text.
/// Trailing empty slots are skipped; an empty left slot in front of a right
/// child prints as `∅` so both sides stay distinguishable. Pending rows sit on
/// an explicit stack, so a degenerate chain renders without recursion.
pub fn print_binary_tree<F, G>(tab: &str, root: u32, children: F, label: G) -> String
where
    F: Fn(u32) -> [Option<u32>; 2],
    G: Fn(u32) -> String,
{
    let mut out = String::new();
    // (node or empty slot, prefix of its row, last sibling?)
    let mut stack: Vec<(Option<u32>, String, bool)> = vec![(Some(root), tab.to_string(), true)];

    while let Some((node, tab, is_last)) = stack.pop() {
        out.push('\n');
        out.push_str(&tab);
        let Some(node) = node else {
            out.push_str("├─ ∅");
            continue;
        };

        out.push_str(if is_last { "└─" } else { "├─" });
        let text = label(node);
        if !text.is_empty() {
            out.push(' ');
            out.push_str(&text);
        }

        let slots = children(node);
        let Some(last) = slots.iter().rposition(Option::is_some) else {
            continue;
        };
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        for i in (0..=last).rev() {
            stack.push((slots[i], child_tab.clone(), i == last));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `[left, right]` links and labels of a fixed tree, indexed by node.
    fn render(links: &[[Option<u32>; 2]], labels: &[&str], root: u32) -> String {
        print_binary_tree("", root, |i| links[i as usize], |i| labels[i as usize].to_string())
    }

    #[test]
    fn prints_nested_children() {
        //   root
        //   ├─ a
        //   │  └─ b
        //   └─ c
        let links = [[Some(1), Some(3)], [Some(2), None], [None, None], [None, None]];
        let out = render(&links, &["root", "a", "b", "c"], 0);
        assert_eq!(out, "\n└─ root\n   ├─ a\n   │  └─ b\n   └─ c");
    }

    #[test]
    fn missing_left_child_keeps_a_slot() {
        let links = [[None, Some(1)], [None, None]];
        let out = render(&links, &["p", "r"], 0);
        assert_eq!(out, "\n└─ p\n   ├─ ∅\n   └─ r");
    }

    #[test]
    fn leaf_prints_single_row() {
        let links = [[None, None]];
        assert_eq!(render(&links, &["x"], 0), "\n└─ x");
    }

    #[test]
    fn long_chain_renders_every_row() {
        let n = 3_000u32;
        let out = print_binary_tree(
            "",
            0,
            |i| [if i + 1 < n { Some(i + 1) } else { None }, None],
            |i| i.to_string(),
        );
        assert_eq!(out.lines().count(), n as usize + 1);
        assert!(out.ends_with("└─ 2999"));
    }
}
