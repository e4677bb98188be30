use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use std::sync::Arc;

use tradegate_core::{EmployeeId, OrderId, ProductId};
use tradegate_sales::{SalesOps, register_enforcers};
use tradegate_store::{Employee, MemoryStore, Product};

fn setup_ops(stock: i64) -> SalesOps {
    let mut store = MemoryStore::new();
    register_enforcers(&mut store);
    let store = Arc::new(store);
    store
        .insert_product(Product {
            id: ProductId::new(10),
            name: "Ikura".into(),
            unit_price: 3100,
            stock,
        })
        .unwrap();
    store
        .insert_employee(Employee {
            id: EmployeeId::new(1),
            name: "Nancy Davolio".into(),
            title: "Sales Rep".into(),
        })
        .unwrap();
    SalesOps::new(store)
}

fn bench_order_line_admission(c: &mut Criterion) {
    c.bench_function("order_line_admission", |b| {
        // Fresh store per iteration so the table scan and the transaction
        // clone stay constant-sized.
        b.iter_batched(
            || setup_ops(100),
            |ops| {
                let line = ops
                    .insert_order_line(OrderId::new(1), ProductId::new(10), 1, None)
                    .unwrap();
                black_box(line);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_order_line_rejection(c: &mut Criterion) {
    c.bench_function("order_line_rejection", |b| {
        let ops = setup_ops(0);
        b.iter(|| {
            let err = ops
                .insert_order_line(OrderId::new(1), ProductId::new(10), 5, None)
                .unwrap_err();
            black_box(err);
        });
    });
}

fn bench_title_change_audit(c: &mut Criterion) {
    c.bench_function("title_change_audit", |b| {
        b.iter_batched(
            || setup_ops(0),
            |ops| {
                let row = ops
                    .change_employee_title(EmployeeId::new(1), "Manager")
                    .unwrap();
                black_box(row);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_order_line_admission,
    bench_order_line_rejection,
    bench_title_change_audit
);
criterion_main!(benches);
