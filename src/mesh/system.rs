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

use std::collections::HashMap;

use crate::mesh::types::{Component, ComponentKind, Edge, EdgeId, Face, FaceId, Node, NodeId, View};

/// Read side of the host mesh.
pub trait MeshSource {
    /// Components registered under `view`, in insertion order.
    fn components_of(&self, view: &View) -> Vec<Component<'_>>;
    /// `None` when `id` does not name a node of this mesh.
    fn node(&self, id: NodeId) -> Option<&Node>;
}

/// Write side of the host mesh.
pub trait MeshSink {
    fn add_node(&mut self, x: f64, y: f64, z: f64) -> NodeId;
    fn add_edge(&mut self, a: NodeId, b: NodeId, view: &View) -> EdgeId;
}

/// Minimal component store: the mesh owns its nodes, edges and faces refer to
/// them by id, and views group ids by name.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
    node_views: HashMap<String, Vec<NodeId>>,
    edge_views: HashMap<String, Vec<EdgeId>>,
    face_views: HashMap<String, Vec<FaceId>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_face(&mut self, face: Face, view: &View) -> FaceId {
        let id = FaceId(self.faces.len());
        self.faces.push(face);
        self.face_views.entry(view.name.clone()).or_default().push(id);
        id
    }

    /// Convenience for tests and callers building faces from coordinates.
    pub fn add_ring(&mut self, coords: &[(f64, f64)]) -> Vec<NodeId> {
        coords
            .iter()
            .map(|&(x, y)| self.add_node(x, y, 0.0))
            .collect()
    }

    pub fn tag_node(&mut self, id: NodeId, view: &View) {
        self.node_views.entry(view.name.clone()).or_default().push(id);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }

    pub fn edges_in(&self, view: &View) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_views
            .get(&view.name)
            .into_iter()
            .flatten()
            .map(|id| &self.edges[id.0])
    }
}

impl MeshSource for Mesh {
    fn components_of(&self, view: &View) -> Vec<Component<'_>> {
        match view.kind {
            ComponentKind::Node => self
                .node_views
                .get(&view.name)
                .map(|ids| ids.iter().map(|&id| Component::Node(id)).collect())
                .unwrap_or_default(),
            ComponentKind::Edge => self.edges_in(view).map(Component::Edge).collect(),
            ComponentKind::Face => self
                .face_views
                .get(&view.name)
                .map(|ids| ids.iter().map(|id| Component::Face(&self.faces[id.0])).collect())
                .unwrap_or_default(),
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }
}

impl MeshSink for Mesh {
    fn add_node(&mut self, x: f64, y: f64, z: f64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(x, y, z));
        id
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId, view: &View) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(a, b));
        self.edge_views.entry(view.name.clone()).or_default().push(id);
        id
    }
}
