// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt;

/// Kind of mesh component a view selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Node,
    Edge,
    Face,
}

/// Named, typed selection of mesh components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct View {
    pub name: String,
    pub kind: ComponentKind,
}

impl View {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn edges(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::Edge)
    }

    pub fn faces(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::Face)
    }

    pub fn nodes(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::Node)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.name, self.kind)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// Mesh node. `z` is carried along but never read by the planar code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Node {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: NodeId,
    pub end: NodeId,
}

impl Edge {
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self { start, end }
    }

    pub fn start_node(&self) -> NodeId {
        self.start
    }

    pub fn end_node(&self) -> NodeId {
        self.end
    }
}

/// Boundary ring of nodes plus owned hole faces. The ring may or may not
/// repeat its first node at the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Face {
    pub nodes: Vec<NodeId>,
    pub holes: Vec<Face>,
}

impl Face {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self {
            nodes,
            holes: Vec::new(),
        }
    }

    pub fn with_hole(mut self, hole: Face) -> Self {
        self.holes.push(hole);
        self
    }

    pub fn boundary_nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn holes(&self) -> &[Face] {
        &self.holes
    }

    /// Boundary ring with the first node appended when it is not already closed.
    pub fn closed_ring(&self) -> Vec<NodeId> {
        let mut ring = self.nodes.clone();
        if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
            if first != last {
                ring.push(first);
            }
        }
        ring
    }
}

/// Handle returned when enumerating a view.
#[derive(Debug, Clone, Copy)]
pub enum Component<'a> {
    Node(NodeId),
    Edge(&'a Edge),
    Face(&'a Face),
}
