use balanced_tree::BalancedTree;

fn main() {
    let mut tree = BalancedTree::new();
    tree.insert("zero");
    tree.insert("one");
    tree.insert("two");
    tree.insert("two");
    tree.insert("three");
    tree.insert("four");
    tree.insert("five");
    assert_eq!(tree.get(&"one"), Some(&"one"));
    tree.remove(&"one");
    assert!(tree.get(&"one").is_none());

    for word in &tree {
        println!("{word}");
    }

    let mut numbers = BalancedTree::new();
    for x in 0..5 {
        numbers.insert(x);
    }
    assert!(numbers.contains(&1));
    numbers.remove(&1);
    assert!(!numbers.contains(&1));
    assert_eq!(numbers.min(), Some(&0));
    assert_eq!(numbers.max(), Some(&4));

    println!("{numbers}");
}
