use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_decimal::Decimal;
use transaction_analyzer::{DateFilter, Transaction, TransactionStore, TransactionType};

const NUM_TRANSACTIONS: usize = 100_000;

fn generate_store() -> TransactionStore {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (0..NUM_TRANSACTIONS)
        .map(|i| Transaction {
            id: i.to_string(),
            date: start + Duration::days((i % 365) as i64),
            amount: Some(Decimal::from(i % 100 + 1)),
            tx_type: if i % 3 == 0 {
                TransactionType::Credit
            } else {
                TransactionType::Debit
            },
            description: format!("Generated transaction {}", i),
            merchant_name: format!("Merchant {}", i % 50),
            card_type: "Visa".to_string(),
        })
        .collect()
}

fn query_transactions(c: &mut Criterion) {
    let store = generate_store();
    let mut group = c.benchmark_group("throughput");

    group.throughput(Throughput::Elements(NUM_TRANSACTIONS as u64));

    group.bench_function("total_amount_100K_transactions", |b| {
        b.iter(|| black_box(store.total_amount()));
    });

    group.bench_function("total_amount_by_month_100K_transactions", |b| {
        b.iter(|| black_box(store.total_amount_by_date(DateFilter::YearMonth(2023, 3))));
    });

    group.bench_function("transactions_by_merchant_100K_transactions", |b| {
        b.iter(|| black_box(store.transactions_by_merchant("Merchant 7").len()));
    });

    group.bench_function("most_frequent_month_100K_transactions", |b| {
        b.iter(|| black_box(store.most_frequent_month()));
    });

    group.bench_function("unique_types_100K_transactions", |b| {
        b.iter(|| black_box(store.unique_types().len()));
    });

    group.finish();
}

criterion_group!(benches, query_transactions);
criterion_main!(benches);
