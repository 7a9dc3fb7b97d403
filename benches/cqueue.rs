use criterion::{criterion_group, criterion_main, Criterion};

use ringlink::cqueue::{CapacityPolicy, CircularQueue};

const CAPACITY: usize = 64;

fn fill_and_drain(c: &mut Criterion) {
    c.bench_function("fill_and_drain", |b| {
        let mut queue = CircularQueue::with_policy(CAPACITY, CapacityPolicy::Counted).unwrap();
        b.iter(|| {
            let mut value = 0;
            while queue.enqueue(value).is_ok() {
                value += 1;
            }
            while queue.dequeue().is_ok() {}
        })
    });
}

fn wraparound(c: &mut Criterion) {
    c.bench_function("wraparound", |b| {
        let mut queue = CircularQueue::new(CAPACITY).unwrap();
        b.iter(|| {
            for value in 0..1024 {
                if queue.is_full() {
                    let _ = queue.dequeue();
                }
                let _ = queue.enqueue(value);
            }
        })
    });
}

fn display(c: &mut Criterion) {
    c.bench_function("display", |b| {
        let mut queue = CircularQueue::new(CAPACITY).unwrap();
        for value in 0..(CAPACITY as i32 - 1) {
            queue.enqueue(value).unwrap();
        }
        b.iter(|| queue.display())
    });
}

criterion_group!(cqueue, fill_and_drain, wraparound, display);

criterion_main!(cqueue);
