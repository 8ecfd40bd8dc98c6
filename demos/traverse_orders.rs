use balanced_tree::{BalancedTree, Traversal};

fn main() {
    let mut tree = BalancedTree::new();
    for value in 1..=6 {
        tree.insert(value);
    }

    for (name, order) in [
        ("Preorder", Traversal::Preorder),
        ("Inorder", Traversal::Inorder),
        ("Postorder", Traversal::Postorder),
        ("Level-order", Traversal::LevelOrder),
    ] {
        println!("{name}: {}", tree.display(order));
    }

    println!("Level-order visit:");
    tree.traverse(Traversal::LevelOrder).for_each(|value| {
        println!("Value: {value}");
    });
}
