use criterion::{Criterion, criterion_group, criterion_main};
use domain::{OrderId, OrderInput, OrderService};
use publisher::InMemoryPublisher;
use store::InMemoryOrderStore;

fn create_service() -> OrderService<InMemoryOrderStore, InMemoryPublisher> {
    OrderService::new(InMemoryOrderStore::new(), InMemoryPublisher::new())
}

fn bench_create_order(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/create_order", |b| {
        b.iter(|| {
            rt.block_on(async {
                let service = create_service();
                service
                    .create(OrderInput::new("1", "Cliente", 100.0))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_get_order(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = create_service();
    rt.block_on(async {
        service
            .create(OrderInput::new("1", "Cliente", 100.0))
            .await
            .unwrap()
    });
    let id = OrderId::new("1");

    c.bench_function("domain/get_order", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.get(&id).await.unwrap();
            });
        });
    });
}

fn bench_update_order(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = create_service();
    rt.block_on(async {
        service
            .create(OrderInput::new("1", "Cliente", 100.0))
            .await
            .unwrap()
    });
    let id = OrderId::new("1");

    c.bench_function("domain/update_order", |b| {
        b.iter(|| {
            rt.block_on(async {
                service
                    .update(&id, OrderInput::new("1", "Cliente Att", 2000.0))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_full_lifecycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/full_create_get_update_delete", |b| {
        b.iter(|| {
            rt.block_on(async {
                let service = create_service();
                let id = OrderId::new("1");
                service
                    .create(OrderInput::new("1", "Cliente", 100.0))
                    .await
                    .unwrap();
                service.get(&id).await.unwrap();
                service
                    .update(&id, OrderInput::new("1", "Cliente Att", 2000.0))
                    .await
                    .unwrap();
                service.delete(&id).await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_create_order,
    bench_get_order,
    bench_update_order,
    bench_full_lifecycle
);
criterion_main!(benches);
