//! Priority schedule over ports and datapaths.

use crate::roles::{Datapath, Port};

/// Pairing of a port and a datapath, remembered at a priority rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// Port of the connection.
    pub port: Port,

    /// Datapath of the connection.
    pub datapath: Datapath,
}

impl Connection {
    /// Creates new connection.
    pub fn new(port: Port, datapath: Datapath) -> Self { Connection { port, datapath } }
}

/// Per-port total order over datapaths, with its inverse.
///
/// For every port p, rank r maps to datapath `(p + r) mod N`, so each port
/// favors a different datapath first and the rotation visits every datapath
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    /// Rank-to-connection order, per port. Index: `order[port][rank]`.
    order: Vec<Vec<Connection>>,

    /// Datapath-to-rank inverse, per port. Index: `rank[port][datapath]`.
    rank: Vec<Vec<usize>>,
}

impl PriorityTable {
    /// Creates the rotation table for `num` port/datapath pairs.
    pub fn new(num: usize) -> Self {
        let mut order = Vec::with_capacity(num);
        let mut rank = Vec::with_capacity(num);

        for port in 0..num {
            let mut order_row = Vec::with_capacity(num);
            let mut rank_row = vec![0; num];
            for priority in 0..num {
                let datapath = (port + priority) % num;
                order_row.push(Connection::new(Port(port), Datapath(datapath)));
                rank_row[datapath] = priority;
            }
            order.push(order_row);
            rank.push(rank_row);
        }

        PriorityTable { order, rank }
    }

    /// Returns the descending-priority connections of the port.
    pub fn order(&self, port: usize) -> &[Connection] { &self.order[port] }

    /// Returns the priority rank of the datapath at the port (0 = highest).
    pub fn rank(&self, port: usize, datapath: usize) -> usize { self.rank[port][datapath] }
}

/// Schedule for N symmetric port/datapath pairs.
///
/// The unit consumed by every code generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    num: usize,
    priorities: PriorityTable,
}

impl Schedule {
    /// Creates the schedule for `num` port/datapath pairs.
    pub fn new(num: usize) -> Self { Schedule { num, priorities: PriorityTable::new(num) } }

    /// Returns the number of port/datapath pairs.
    pub fn num_pairs(&self) -> usize { self.num }

    /// Returns the priority table.
    pub fn priorities(&self) -> &PriorityTable { &self.priorities }
}
