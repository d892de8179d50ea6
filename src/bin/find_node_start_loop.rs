use cycle_start::{build_list, CycleStartStrategy};

fn main() -> cycle_start::Result<()> {
    // 1 -> 2 -> 3 -> 4 -> 5 -> back to 3
    let (head, _nodes) = build_list(vec![1, 2, 3, 4, 5], Some(2))?;

    for strategy in CycleStartStrategy::ALL {
        match strategy.find(&head) {
            Some(start) => println!("{}", start.borrow().data),
            None => println!("none"),
        }
    }

    Ok(())
}
