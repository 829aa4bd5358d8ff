//! Unit tests for gc-route.

#[cfg(test)]
mod helpers {
    use gc_graph::{GraphBuilder, NeighborSetGraph};
    use gc_graph::generate;

    /// Nodes `0..=10`, edge `(i, i+1)` of weight 1.
    pub fn path11() -> NeighborSetGraph<usize> {
        generate::path(11, 1.0).unwrap().build_neighbor_set()
    }

    /// Two ways from 0 to 4:
    ///
    /// ```text
    ///   0 —1— 1 —1— 2 —1— 4
    ///    \               /
    ///     5 ——— 3 ——— 1
    /// ```
    ///
    /// `0→1→2→4` costs 3, `0→3→4` costs 6.
    pub fn diamond() -> NeighborSetGraph<usize> {
        let mut b = GraphBuilder::undirected();
        b.add_edge(0, 1, 1.0).unwrap();
        b.add_edge(1, 2, 1.0).unwrap();
        b.add_edge(2, 4, 1.0).unwrap();
        b.add_edge(0, 3, 5.0).unwrap();
        b.add_edge(3, 4, 1.0).unwrap();
        b.build_neighbor_set()
    }
}

// ── Route construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use approx::assert_abs_diff_eq;
    use gc_core::Position;

    use super::helpers::path11;
    use crate::{Route, RouteError, Step};

    #[test]
    fn from_steps_requires_a_walk() {
        let ok = Route::from_steps([Step::new(0, 1, 1.0), Step::new(1, 2, 2.0)]).unwrap();
        assert_eq!(ok.step_count(), 2);
        assert_eq!(ok.first_node(), Some(0));
        assert_eq!(ok.last_node(), Some(2));

        let bad = Route::from_steps([Step::new(0, 1, 1.0), Step::new(2, 3, 1.0)]);
        assert!(matches!(bad, Err(RouteError::InconsistentPath(_))));
    }

    #[test]
    fn through_reads_weights() {
        let g = path11();
        let r = Route::through(&g, &[3, 4, 5, 6]).unwrap();
        assert_eq!(r.step_count(), 3);
        assert_abs_diff_eq!(r.length(), 3.0);
        assert_eq!(r.nodes().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn through_rejects_missing_edge() {
        let g = path11();
        assert!(matches!(Route::through(&g, &[3, 5]), Err(RouteError::Graph(_))));
    }

    #[test]
    fn concat_adds_steps_and_lengths() {
        let g = path11();
        let a = Route::through(&g, &[0, 1, 2, 3]).unwrap();
        let b = Route::through(&g, &[3, 4, 5]).unwrap();
        let (la, lb) = (a.length(), b.length());
        let c = a.concat(b).unwrap();
        assert_eq!(c.step_count(), 5);
        assert_abs_diff_eq!(c.length(), la + lb);
        assert_eq!(c.last_node(), Some(5));
    }

    #[test]
    fn concat_rejects_mismatched_endpoints() {
        let g = path11();
        let a = Route::through(&g, &[0, 1, 2]).unwrap();
        let b = Route::through(&g, &[3, 4]).unwrap();
        assert!(matches!(a.concat(b), Err(RouteError::InconsistentPath(_))));
    }

    #[test]
    fn concat_with_empty_is_identity() {
        let g = path11();
        let a = Route::through(&g, &[0, 1, 2]).unwrap();
        assert_eq!(a.clone().concat(Route::empty()).unwrap(), a);
        assert_eq!(Route::empty().concat(a.clone()).unwrap(), a);
    }

    #[test]
    fn fractional_legs_count_towards_length() {
        let g = path11();
        let r = Route::through(&g, &[2, 3, 4])
            .unwrap()
            .with_start(&g, Position::Edge { a: 1, b: 2, offset: 0.25 })
            .unwrap()
            .with_end(&g, Position::Edge { a: 4, b: 5, offset: 0.5 })
            .unwrap();
        assert_abs_diff_eq!(r.start().unwrap().distance, 0.75);
        assert_abs_diff_eq!(r.end().unwrap().distance, 0.5);
        assert_abs_diff_eq!(r.length(), 3.25);
    }

    #[test]
    fn start_leg_must_touch_first_node() {
        let g = path11();
        let r = Route::through(&g, &[2, 3]).unwrap();
        let bad = r.with_start(&g, Position::Edge { a: 5, b: 6, offset: 0.5 });
        assert!(matches!(bad, Err(RouteError::InconsistentPath(_))));
    }

    #[test]
    fn concat_rejects_interior_legs() {
        let g = path11();
        let a = Route::through(&g, &[0, 1])
            .unwrap()
            .with_end(&g, Position::Edge { a: 1, b: 2, offset: 0.5 })
            .unwrap();
        let b = Route::through(&g, &[1, 2]).unwrap();
        assert!(matches!(a.concat(b), Err(RouteError::InconsistentPath(_))));
    }

    #[test]
    fn pop_step_advances_first_node() {
        let g = path11();
        let mut r = Route::through(&g, &[0, 1, 2]).unwrap();
        let s = r.pop_step().unwrap();
        assert_eq!((s.origin, s.destination), (0, 1));
        assert_eq!(r.first_node(), Some(1));
        r.pop_step();
        assert!(r.is_empty());
        assert_eq!(r.first_node(), Some(2));
        assert!(r.pop_step().is_none());
    }

    #[test]
    fn push_step_must_continue_the_walk() {
        assert!(Step::new(0, 1, 1.0).continues_into(&Step::new(1, 2, 1.0)));
        assert!(!Step::new(0, 1, 1.0).continues_into(&Step::new(0, 2, 1.0)));

        let g = path11();
        let mut r = Route::through(&g, &[0, 1]).unwrap();
        assert!(matches!(
            r.push_step(Step::new(2, 3, 1.0)),
            Err(RouteError::InconsistentPath(_))
        ));
        r.push_step(Step::new(1, 2, 1.0)).unwrap();
        assert_eq!(r.last_node(), Some(2));

        // Emptied by consumption, the route still continues from its last node.
        r.pop_step();
        r.pop_step();
        assert!(r.push_step(Step::new(0, 1, 1.0)).is_err());
        r.push_step(Step::new(2, 3, 1.0)).unwrap();
        assert_eq!((r.first_node(), r.last_node()), (Some(2), Some(3)));
    }

    #[test]
    fn push_after_end_leg_fails() {
        let g = path11();
        let mut r = Route::through(&g, &[0, 1])
            .unwrap()
            .with_end(&g, Position::Edge { a: 1, b: 2, offset: 0.5 })
            .unwrap();
        assert!(r.push_step(Step::new(1, 2, 1.0)).is_err());
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

#[cfg(test)]
mod router {
    use approx::assert_abs_diff_eq;
    use gc_core::Position;
    use gc_graph::GraphBuilder;

    use super::helpers::{diamond, path11};
    use crate::{DijkstraRouter, RouteError, Router};

    #[test]
    fn picks_the_cheaper_branch() {
        let g = diamond();
        let r = DijkstraRouter.route(&g, Position::Node(0), Position::Node(4)).unwrap();
        assert_eq!(r.nodes().collect::<Vec<_>>(), vec![0, 1, 2, 4]);
        assert_abs_diff_eq!(r.length(), 3.0);
    }

    #[test]
    fn same_node_is_trivial() {
        let g = diamond();
        let r = DijkstraRouter.route(&g, Position::Node(2), Position::Node(2)).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.first_node(), Some(2));
    }

    #[test]
    fn mid_edge_origin_leaves_by_the_closer_end() {
        let g = path11();
        let from = Position::Edge { a: 3, b: 4, offset: 0.25 };
        let r = DijkstraRouter.route(&g, from, Position::Node(6)).unwrap();
        assert_eq!(r.first_node(), Some(4));
        assert_abs_diff_eq!(r.length(), 2.75);
        assert_eq!(r.start().unwrap().position, from);
    }

    #[test]
    fn mid_edge_target_gets_end_leg() {
        let g = path11();
        let to = Position::Edge { a: 7, b: 6, offset: 0.5 };
        let r = DijkstraRouter.route(&g, Position::Node(0), to).unwrap();
        assert_eq!(r.last_node(), Some(6));
        assert_abs_diff_eq!(r.length(), 6.5);
    }

    #[test]
    fn same_edge_moves_directly() {
        let g = path11();
        let from = Position::Edge { a: 3, b: 4, offset: 0.25 };
        let to = Position::Edge { a: 4, b: 3, offset: 0.25 };
        let r = DijkstraRouter.route(&g, from, to).unwrap();
        assert_eq!(r.step_count(), 0);
        assert_eq!(r.first_node(), None);
        assert_abs_diff_eq!(r.length(), 0.5);
    }

    #[test]
    fn disconnected_is_no_route() {
        let mut b = GraphBuilder::undirected();
        b.add_edge(0, 1, 1.0).unwrap();
        b.add_edge(2, 3, 1.0).unwrap();
        let g = b.build_matrix();
        let r = DijkstraRouter.route(&g, Position::Node(0), Position::Node(3));
        assert!(matches!(r, Err(RouteError::NoRoute { .. })));
    }

    #[test]
    fn directed_edges_are_respected() {
        let mut b = GraphBuilder::directed();
        b.add_edge(0, 1, 1.0).unwrap();
        b.add_edge(1, 2, 1.0).unwrap();
        b.add_edge(2, 0, 10.0).unwrap();
        let g = b.build_edge_list();
        let back = DijkstraRouter.route(&g, Position::Node(2), Position::Node(1)).unwrap();
        assert_eq!(back.nodes().collect::<Vec<_>>(), vec![2, 0, 1]);
        assert_abs_diff_eq!(back.length(), 11.0);
    }

    #[test]
    fn unknown_node_is_a_graph_error() {
        let g = path11();
        let r = DijkstraRouter.route(&g, Position::Node(0), Position::Node(99));
        assert!(matches!(r, Err(RouteError::Graph(_))));
    }

    #[test]
    fn works_through_a_trait_object() {
        let g = path11();
        let dynamic: &dyn gc_graph::WeightedGraph<usize> = &g;
        let r = DijkstraRouter.route(dynamic, Position::Node(0), Position::Node(3)).unwrap();
        assert_eq!(r.step_count(), 3);
    }
}
