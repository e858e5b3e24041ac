//! Adjacency helpers.

use crate::graph::edge::TrustLine;
use crate::graph::pool::TrustLinePool;
use crate::types::enums::TrustLineKind;

/// Iterator over the trust lines touching a participant on one side.
pub struct LineIterator<'a> {
    lines: core::slice::Iter<'a, TrustLine>,
    name: &'a str,
    direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Lines extended by the participant (`from == name`).
    Outgoing,
    /// Lines extended to the participant (`to == name`).
    Incoming,
}

impl<'a> LineIterator<'a> {
    pub fn new(pool: &'a TrustLinePool, name: &'a str, direction: Direction) -> Self {
        Self {
            lines: pool.raw_lines().iter(),
            name,
            direction,
        }
    }
}

impl<'a> Iterator for LineIterator<'a> {
    type Item = &'a TrustLine;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.name;
        let direction = self.direction;
        self.lines.by_ref().find(|line| match direction {
            Direction::Outgoing => line.from.as_str() == name,
            Direction::Incoming => line.to.as_str() == name,
        })
    }
}

/// Sum of the headroom on credit lines extended to `name`.
///
/// Settlement edges carry no credit and overdrawn lines contribute nothing.
pub fn inbound_headroom(pool: &TrustLinePool, name: &str) -> i64 {
    LineIterator::new(pool, name, Direction::Incoming)
        .filter(|line| line.kind() == TrustLineKind::Credit)
        .map(|line| line.headroom().max(0))
        .fold(0i64, |acc, h| acc.saturating_add(h))
}
