use expense_repo::transaction_repo::NewTransaction;
use fake::faker::lorem::en::{Sentence, Word};
use fake::{Fake, Faker};
use rand::seq::SliceRandom;

const TYPES: [&str; 2] = ["income", "expense"];

fn fake_date() -> String {
    format!(
        "{:04}-{:02}-{:02}",
        (1990..2030).fake::<i32>(),
        (1..13).fake::<u32>(),
        (1..29).fake::<u32>()
    )
}

fn fake_amount() -> f64 {
    f64::from((-1_000_000..1_000_000).fake::<i32>()) / 100.0
}

pub fn generate_new_transaction() -> NewTransaction {
    let description: Option<String> = if Faker.fake::<bool>() {
        Some(Sentence(3..8).fake())
    } else {
        None
    };
    NewTransaction {
        transaction_type: TYPES
            .choose(&mut rand::thread_rng())
            .map(|t| t.to_string()),
        category: Some(Word().fake()),
        amount: Some(fake_amount()),
        date: Some(fake_date()),
        description,
    }
}

#[allow(dead_code)]
pub fn generate_new_transaction_with_type_and_amount(
    transaction_type: &str,
    amount: f64,
) -> NewTransaction {
    NewTransaction {
        transaction_type: Some(transaction_type.to_string()),
        amount: Some(amount),
        ..generate_new_transaction()
    }
}
