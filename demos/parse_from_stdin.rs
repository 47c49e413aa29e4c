use std::io;
use urin::UrinReference;

fn main() {
    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        match line.parse::<UrinReference>() {
            Ok(r) => println!("{r}\n{r:#?}"),
            Err(e) => println!("Error: {e}"),
        };
    }
}
