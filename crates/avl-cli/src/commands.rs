use std::fs;
use std::io::{self, Read, Write};

use avl_index::rebase;
use avl_index::{AvlTree, SequenceMap};
use serde_json::json;

type Result<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

/// `avl query <db>` — Print the enzymes for each sequence read from stdin.
pub fn query(db_path: &str) -> Result {
    let tree = load(db_path)?;
    println!("Input filename is {db_path}");

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let stdout = io::stdout();
    answer_queries(&tree, &input, &mut stdout.lock())?;
    Ok(())
}

/// `avl stats <db> <queries>` — Report size, depth, and recursion counts.
pub fn stats(db_path: &str, queries_path: &str, as_json: bool) -> Result {
    let mut tree = load(db_path)?;
    let queries = fs::read_to_string(queries_path)?;
    let report = Report::measure(&mut tree, &queries);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        println!("Input file is {db_path}, and sequences file is {queries_path}");
        report.print();
    }
    Ok(())
}

/// `avl dump <db>` — Print every record in sequence order.
pub fn dump(db_path: &str) -> Result {
    let tree = load(db_path)?;
    tree.print_tree();
    Ok(())
}

fn load(db_path: &str) -> Result<AvlTree<SequenceMap>> {
    let contents = fs::read_to_string(db_path)
        .map_err(|e| format!("cannot read database '{db_path}': {e}"))?;
    let mut tree = AvlTree::new();
    rebase::load_into(&contents, &mut tree)?;
    Ok(tree)
}

fn answer_queries<W: Write>(tree: &AvlTree<SequenceMap>, input: &str, out: &mut W) -> io::Result<()> {
    for sequence in input.split_whitespace() {
        match tree.find(sequence) {
            Some(record) => writeln!(out, "{record}")?,
            None => writeln!(out, "Not Found")?,
        }
    }
    Ok(())
}

/// Empirical cost of an index, before and after removing every other query.
#[derive(Debug, Clone, PartialEq)]
struct Report {
    nodes: usize,
    avg_depth: f64,
    depth_per_node: f64,
    found: usize,
    avg_find_recursion: f64,
    removed: usize,
    avg_remove_recursion: f64,
    remaining_nodes: usize,
    remaining_avg_depth: f64,
    remaining_depth_per_node: f64,
}

impl Report {
    fn measure(tree: &mut AvlTree<SequenceMap>, queries: &str) -> Self {
        let nodes = tree.count();
        let avg_depth = guarded_avg_depth(tree);

        let mut found = 0;
        let mut find_steps = 0;
        let mut total = 0;
        for sequence in queries.split_whitespace() {
            total += 1;
            if tree.contains(sequence) {
                found += 1;
            }
            find_steps += tree.find_recursion_count(sequence);
        }

        let mut removed = 0;
        let mut remove_steps = 0;
        for sequence in queries.split_whitespace().step_by(2) {
            if tree.contains(sequence) {
                removed += 1;
                remove_steps += tree.remove_recursion_count(sequence);
            }
            tree.remove(sequence);
        }

        let remaining_nodes = tree.count();
        let remaining_avg_depth = guarded_avg_depth(tree);

        Self {
            nodes,
            avg_depth,
            depth_per_node: ratio(avg_depth, nodes),
            found,
            avg_find_recursion: ratio(find_steps as f64, total),
            removed,
            avg_remove_recursion: ratio(remove_steps as f64, removed),
            remaining_nodes,
            remaining_avg_depth,
            remaining_depth_per_node: ratio(remaining_avg_depth, remaining_nodes),
        }
    }

    fn print(&self) {
        println!("2: {}", self.nodes);
        println!("3a: {}", self.avg_depth);
        println!("3b: {}", self.depth_per_node);
        println!("4a: {}", self.found);
        println!("4b: {}", self.avg_find_recursion);
        println!("5a: {}", self.removed);
        println!("5b: {}", self.avg_remove_recursion);
        println!("6a: {}", self.remaining_nodes);
        println!("6b: {}", self.remaining_avg_depth);
        println!("6c: {}", self.remaining_depth_per_node);
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "nodes": self.nodes,
            "avg_depth": self.avg_depth,
            "depth_per_node": self.depth_per_node,
            "queries": {
                "found": self.found,
                "avg_find_recursion": self.avg_find_recursion,
            },
            "removals": {
                "removed": self.removed,
                "avg_remove_recursion": self.avg_remove_recursion,
            },
            "after_removal": {
                "nodes": self.remaining_nodes,
                "avg_depth": self.remaining_avg_depth,
                "depth_per_node": self.remaining_depth_per_node,
            },
        })
    }
}

fn guarded_avg_depth(tree: &AvlTree<SequenceMap>) -> f64 {
    if tree.is_empty() {
        0.0
    } else {
        tree.avg_depth()
    }
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DB: &str = "\
REBASE version 1
=-=-=-=-=-=-=-=-=-=-=
REBASE, The Restriction Enzyme Database
Copyright (c) Dr. Richard J. Roberts.
All rights reserved.

Rich Roberts

format: enzyme/seq1/seq2//
-----------------------------
AanI/TTA'TAA//
PsiI/TTA'TAA//
EcoRI/G'AATTC//
BamHI/G'GATCC//
AarI/CACCTGCNNNN'NNNN/'NNNNNNNNGCAGGTG//
";

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    fn write_db() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DB.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_reads_database_file() {
        let file = write_db();
        let tree = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(tree.count(), 5);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load("/nonexistent/rebase.txt").unwrap_err();
        assert!(err.to_string().contains("cannot read database"));
    }

    #[test]
    fn queries_print_acronyms_or_not_found() {
        let mut tree = AvlTree::new();
        rebase::load_into(DB, &mut tree).unwrap();

        let mut out = Vec::new();
        answer_queries(&tree, "TTA'TAA\nGGGG\n G'AATTC", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "AanI PsiI \nNot Found\nEcoRI \n"
        );
    }

    #[test]
    fn report_counts_finds_and_removals() {
        let mut tree = AvlTree::new();
        rebase::load_into(DB, &mut tree).unwrap();

        // Removal pass visits the 1st and 3rd queries only.
        let report = Report::measure(&mut tree, "TTA'TAA GGGG G'GATCC NOPE");
        assert_eq!(report.nodes, 5);
        assert_close(report.avg_depth, 1.2);
        assert_close(report.depth_per_node, 0.24);
        assert_eq!(report.found, 2);
        assert_close(report.avg_find_recursion, 1.25);
        assert_eq!(report.removed, 2);
        assert_close(report.avg_remove_recursion, 1.0);
        assert_eq!(report.remaining_nodes, 3);
        assert_close(report.remaining_avg_depth, 2.0 / 3.0);
        assert_close(report.remaining_depth_per_node, 2.0 / 9.0);
        assert!(!tree.contains("TTA'TAA"));
        assert!(tree.contains("G'AATTC"));
    }

    #[test]
    fn report_on_empty_inputs_is_all_zero() {
        let mut tree = AvlTree::new();
        let report = Report::measure(&mut tree, "");
        assert_eq!(report.nodes, 0);
        assert_eq!(report.avg_depth, 0.0);
        assert_eq!(report.depth_per_node, 0.0);
        assert_eq!(report.avg_find_recursion, 0.0);
        assert_eq!(report.avg_remove_recursion, 0.0);
        assert_eq!(report.remaining_depth_per_node, 0.0);
    }

    #[test]
    fn json_report_nests_sections() {
        let mut tree = AvlTree::new();
        rebase::load_into(DB, &mut tree).unwrap();
        let value = Report::measure(&mut tree, "TTA'TAA").to_json();
        assert_eq!(value["nodes"], 5);
        assert_eq!(value["queries"]["found"], 1);
        assert_eq!(value["after_removal"]["nodes"], 4);
    }
}
