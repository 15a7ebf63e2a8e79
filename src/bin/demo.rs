use checked_list::{list, List};

fn main() {
    let strings = list![
        "first".to_string(),
        "second".to_string(),
        "third".to_string(),
        "fourth".to_string(),
        "fifth".to_string(),
    ];
    println!("Initialized {} from a literal list", strings);

    // Iterator adapter support
    let shouted: List<String> = strings
        .iter()
        .filter(|word| word.starts_with('f'))
        .map(|word| word.to_uppercase())
        .rev()
        .collect();
    println!("Modified: {}", shouted);

    // Concatenation
    let concatenated = &strings + &shouted;
    println!("Concatenated: {}", concatenated);

    // Reverse construction
    let mut reversed: List<String> = concatenated
        .iter()
        .rev()
        .map(|word| (*word).clone())
        .collect();

    // Emplace operations
    reversed.emplace_head("head".to_string());
    reversed.emplace_tail("tail".to_string());
    let mut middle = reversed.cursor_head();
    for _ in 0..reversed.len() / 2 {
        middle
            .move_next()
            .expect("the walk stays within the list");
    }
    reversed
        .emplace_before(&middle, "middle".to_string())
        .expect("the middle position is alive");

    // Peek operations
    reversed
        .peek_head_mut()
        .expect("the list is not empty")
        .push_str("_");
    reversed
        .peek_tail_mut()
        .expect("the list is not empty")
        .push_str("_");

    println!("Pushed some strings: {}\n", reversed);

    let watcher = reversed.cursor_head();
    println!(
        "Got a cursor to the first element, dangling = {}, value = {}",
        watcher.is_dangling(),
        watcher.value().expect("the first element is alive"),
    );

    println!("Popping from the head");
    while let Some(word) = reversed.pop_head() {
        println!("{:<8}: {}", word, reversed);
    }

    // Dangling cursor check
    println!(
        "\nDid the cursor to the first element expire? {}",
        watcher.is_dangling()
    );

    println!("Trying to dereference it");
    match watcher.value() {
        Ok(value) => println!("Unexpectedly still alive: {}", value),
        Err(error) => println!("Got error \"{}\"", error),
    };
}
