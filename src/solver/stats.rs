use std::fmt::{Debug, Display, Formatter, Result};

use separator::Separatable;

/// Per-depth counters. Depth is the board's move count.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created: Vec<u64>,
    expanded: Vec<u64>,
    pruned: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created.iter().sum()
    }

    pub fn total_expanded(&self) -> u64 {
        self.expanded.iter().sum()
    }

    pub fn total_pruned(&self) -> u64 {
        self.pruned.iter().sum()
    }

    pub fn created_at(&self, depth: u32) -> u64 {
        self.created.get(depth as usize).cloned().unwrap_or(0)
    }

    pub fn expanded_at(&self, depth: u32) -> u64 {
        self.expanded.get(depth as usize).cloned().unwrap_or(0)
    }

    pub fn pruned_at(&self, depth: u32) -> u64 {
        self.pruned.get(depth as usize).cloned().unwrap_or(0)
    }

    /// Returns true if this is the first board created at this depth.
    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created, depth)
    }

    /// Returns true if this is the first board expanded at this depth.
    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded, depth)
    }

    pub(crate) fn add_pruned(&mut self, depth: u32) -> bool {
        Self::add(&mut self.pruned, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because the root doesn't have to start at depth 0
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "created by depth: {:?}", self.created)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded)?;
        writeln!(f, "pruned duplicates by depth: {:?}", self.pruned)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())?;
        writeln!(f, "total pruned duplicates: {}", self.total_pruned().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Boards created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Boards expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(f, "Duplicates pruned total: {}", self.total_pruned().separated_string())?;
        writeln!(f)?;

        writeln!(f, "{:<15}{:<15}{:<15}{}", "Depth", "Created", "Expanded", "Pruned")?;
        let depths = self.created.len().max(self.expanded.len()).max(self.pruned.len());
        for depth in 0..depths as u32 {
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                self.created_at(depth).separated_string(),
                self.expanded_at(depth).separated_string(),
                self.pruned_at(depth).separated_string(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_expanded(0));
        assert!(stats.add_created(1));
        assert!(!stats.add_created(1));
        assert!(stats.add_created(3));
        assert!(stats.add_pruned(2));

        assert_eq!(stats.total_created(), 4);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.total_pruned(), 1);
        assert_eq!(stats.created_at(1), 2);
        assert_eq!(stats.created_at(2), 0);
        assert_eq!(stats.created_at(3), 1);
        assert_eq!(stats.expanded_at(7), 0);
        assert_eq!(stats.pruned_at(2), 1);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        for _ in 0..1500 {
            stats.add_created(1);
        }
        stats.add_expanded(0);

        let expected = r"
Boards created total: 1,500
Boards expanded total: 1
Duplicates pruned total: 0

Depth          Created        Expanded       Pruned
0:             0              1              0
1:             1,500          0              0
"
        .trim_start_matches('\n');
        assert_eq!(stats.to_string(), expected);
    }
}
