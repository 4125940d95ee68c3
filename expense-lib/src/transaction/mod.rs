use actix_web::{web, Scope};

mod handlers;
mod pagination;

pub use pagination::{PageQuery, MAX_LIMIT};

pub fn transaction_service() -> Scope {
    web::scope("/transactions")
        .service(handlers::get_transaction)
        .service(handlers::get_all_transactions)
        .service(handlers::create_new_transaction)
        .service(handlers::update_transaction)
        .service(handlers::delete_transaction)
}

pub fn summary_service() -> Scope {
    web::scope("/summary").service(handlers::get_summary)
}
