/*!
 * Priority Queue Benchmarks
 *
 * Single-threaded insert/pop cost and contended throughput under the queue lock
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use maxpq::{Node, PriorityQueue, QueueConfig};
use rand::Rng;
use std::sync::Arc;
use std::thread;

fn random_priorities(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

fn bench_insert_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_pop");

    for size in [100usize, 1_000, 10_000] {
        let priorities = random_priorities(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &priorities, |b, priorities| {
            b.iter(|| {
                let queue = PriorityQueue::new();
                for (i, p) in priorities.iter().enumerate() {
                    queue.insert(Node::new(i, *p));
                }
                while let Ok(node) = queue.pop() {
                    black_box(node);
                }
            });
        });
    }

    group.finish();
}

fn bench_preallocated(c: &mut Criterion) {
    let priorities = random_priorities(10_000);

    c.bench_function("insert_preallocated_10000", |b| {
        b.iter(|| {
            let queue = PriorityQueue::with_config(QueueConfig::with_capacity(10_000));
            queue.extend(priorities.iter().enumerate().map(|(i, p)| Node::new(i, *p)));
            black_box(queue.size());
        });
    });
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");

    for threads in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let queue = Arc::new(PriorityQueue::new());
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let queue = queue.clone();
                        thread::spawn(move || {
                            for i in 0..1_000 {
                                queue.insert(Node::new(i, (i * threads + t) as f64));
                                if i % 2 == 1 {
                                    black_box(queue.pop().ok());
                                }
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_pop, bench_preallocated, bench_contended);
criterion_main!(benches);
