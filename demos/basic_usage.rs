//! Walks an `OptionalSlot` through its lifecycle.

use optslot::{EmptyAccess, OptionalSlot};

#[derive(Debug, Clone)]
struct Connection {
    peer: String,
}

impl Drop for Connection {
    fn drop(&mut self) {
        println!("  closing connection to {}", self.peer);
    }
}

fn main() -> Result<(), EmptyAccess> {
    let mut slot = OptionalSlot::new();
    println!("empty: has_value = {}", slot.has_value());

    println!("emplace:");
    slot.emplace(Connection { peer: "alpha".into() });
    println!("  {:?}", slot.value()?);

    println!("emplace over a live value:");
    slot.emplace_with(|| Connection { peer: "beta".into() });

    println!("copy:");
    let copy = slot.clone();
    println!("  original = {:?}, copy = {:?}", slot, copy);

    println!("reset:");
    slot.reset();
    slot.reset();

    match slot.value() {
        Ok(conn) => println!("unexpected value {conn:?}"),
        Err(err) => println!("checked access: {err}"),
    }

    println!("drop copy:");
    drop(copy);
    Ok(())
}
