use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading phone and user collections...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_files(data_dir)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let (users, phones) = catalog.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Users: {}", users);
    println!("Phones: {}", phones);
}
