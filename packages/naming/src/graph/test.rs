// Module Graph Tests

#[cfg(test)]
mod tests {
    use crate::graph::*;

    fn chain() -> (ModuleGraph, ModuleKey, ModuleKey, ModuleKey) {
        let mut graph = ModuleGraph::new();
        let entry = graph.add_module(Module::new("entry").with_resource("/app/src/main.js"));
        let a = graph.add_module(
            Module::new("a")
                .with_request("./a")
                .with_resource("/app/src/a.js"),
        );
        let b = graph.add_module(
            Module::new("b")
                .with_request("./b")
                .with_resource("/app/src/b.js"),
        );
        graph.add_dependency(DependencyEdge::new(Some(entry), a, "./a"));
        graph.add_dependency(DependencyEdge::new(Some(a), b, "./b"));
        (graph, entry, a, b)
    }

    mod module_graph_tests {
        use super::*;

        #[test]
        fn should_index_incoming_edges_in_order() {
            let (mut graph, entry, a, b) = chain();
            graph.add_dependency(DependencyEdge::new(Some(entry), b, "./b?second"));

            let requests: Vec<_> = graph.incoming_edges(b).map(|e| e.request.as_str()).collect();
            assert_eq!(requests, vec!["./b", "./b?second"]);
            assert_eq!(graph.incoming_edges(a).count(), 1);
            assert_eq!(graph.incoming_edges(entry).count(), 0);
        }

        #[test]
        fn should_find_modules_by_identifier() {
            let (graph, _, a, _) = chain();
            assert_eq!(graph.find("a"), Some(a));
            assert_eq!(graph.find("missing"), None);
        }

        #[test]
        fn should_record_module_ids() {
            let (mut graph, _, a, b) = chain();
            graph.set_module_id(a, "a");
            assert_eq!(graph.module_id(a), Some("a"));
            assert_eq!(graph.module_id(b), None);
            assert_eq!(graph.module_ids().len(), 1);
        }
    }

    mod merge_tests {
        use super::*;

        #[test]
        fn should_hide_absorbed_modules() {
            let (mut graph, entry, a, b) = chain();
            let merged = graph.merge_modules("a + 1 modules", a, vec![a, b]);

            let live: Vec<_> = graph.modules().map(|(k, _)| k).collect();
            assert_eq!(live, vec![entry, merged]);
            assert_eq!(graph.module(a).merged_into, Some(merged));
            assert!(graph.module(merged).is_merge_root());
        }

        #[test]
        fn should_retarget_external_edges_to_merge_root() {
            let (mut graph, entry, a, b) = chain();
            let merged = graph.merge_modules("a + 1 modules", a, vec![a, b]);

            let incoming: Vec<_> = graph.incoming_edges(merged).collect();
            assert_eq!(incoming.len(), 1);
            assert_eq!(incoming[0].origin, Some(entry));
            assert_eq!(graph.incoming_edges(a).count(), 0);
            // internal edge a -> b is untouched
            assert_eq!(graph.incoming_edges(b).count(), 1);
        }

        #[test]
        fn should_resolve_real_module() {
            let (mut graph, entry, a, b) = chain();
            let merged = graph.merge_modules("a + 1 modules", a, vec![a, b]);
            assert_eq!(graph.real_module(merged), a);
            assert_eq!(graph.real_module(entry), entry);
        }

        #[test]
        fn should_flatten_modules_before_merge() {
            let (mut graph, entry, a, b) = chain();
            graph.merge_modules("a + 1 modules", a, vec![a, b]);
            assert_eq!(graph.modules_before_merge(), vec![entry, a, b]);
        }

        #[test]
        fn should_copy_build_meta_from_root() {
            let (mut graph, _, a, b) = chain();
            graph
                .module_mut(a)
                .build_meta
                .as_mut()
                .unwrap()
                .insert("strict", serde_json::Value::Bool(true));
            let merged = graph.merge_modules("a + 1 modules", a, vec![a, b]);
            let meta = graph.module(merged).build_meta.as_ref().unwrap();
            assert_eq!(meta.get("strict"), Some(&serde_json::Value::Bool(true)));
        }
    }

    mod build_meta_tests {
        use super::*;

        #[test]
        fn should_read_stored_module_name() {
            let mut meta = BuildMeta::new();
            assert_eq!(meta.module_name(), None);
            meta.insert("module-name", serde_json::Value::String("views/home".into()));
            assert_eq!(meta.module_name(), Some("views/home"));
        }

        #[test]
        fn should_ignore_non_string_module_name() {
            let mut meta = BuildMeta::new();
            meta.insert("module-name", serde_json::Value::Bool(true));
            assert_eq!(meta.module_name(), None);
        }
    }
}
