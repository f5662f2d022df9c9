//! Basic usage example for veb-tree.
//!
//! This example demonstrates the core functionality of the vEB tree.

use veb_tree::{VebError, VebTree};

fn main() -> Result<(), VebError> {
    println!("=== veb-tree - Basic Usage Example ===\n");

    // Universe is rounded up to the next power of two
    let mut tree = VebTree::new(1000)?;
    println!(
        "Created tree for capacity 1000: universe {}, {} nodes",
        tree.capacity(),
        tree.node_count()
    );

    println!("\nInserting keys: 100, 200, 150, 300");
    for key in [100, 200, 150, 300] {
        tree.insert(key)?;
    }
    println!("Tree now contains {} keys", tree.len());

    println!("\nMembership checks:");
    println!("  contains(150): {}", tree.contains(150));
    println!("  contains(999): {}", tree.contains(999));

    println!("\nMin/Max (O(1)):");
    println!("  min: {:?}", tree.min());
    println!("  max: {:?}", tree.max());

    println!("\nNavigation:");
    println!("  successor(100): {:?}", tree.successor(100));
    println!("  successor(175): {:?}", tree.successor(175));
    println!("  predecessor(200): {:?}", tree.predecessor(200));
    println!("  predecessor(100): {:?}", tree.predecessor(100));

    println!("\nIteration (sorted order):");
    let keys: Vec<u32> = tree.iter().collect();
    println!("  {keys:?}");

    println!("\nRemoving 150");
    tree.remove(150)?;
    println!("  successor(100): {:?}", tree.successor(100));

    println!("\nOut-of-range insert:");
    match tree.insert(5000) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => println!("  rejected: {err}"),
    }

    tree.clear();
    println!("\nAfter clear: {} keys, min {:?}", tree.len(), tree.min());

    Ok(())
}
