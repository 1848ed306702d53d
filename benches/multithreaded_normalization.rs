use cnpj_normalizer::CnpjNormalizer;
use criterion::Criterion;
use std::sync::mpsc::channel;
use std::sync::Arc;
use threadpool::ThreadPool;

pub fn multithread_normalization(c: &mut Criterion) {
    let normalizer = Arc::new(CnpjNormalizer::default());
    let sample_inputs = Arc::new(sample_inputs());

    let num_threads = 32;
    // There are more jobs than threads to test things that may take longer the first time
    // a thread does something (e.g. thread local storage)
    let num_jobs = num_threads * 25;
    let thread_pool = ThreadPool::new(num_threads);

    c.bench_function("validate and parse (multi-threaded)", |b| {
        b.iter(|| {
            let (sender, receiver) = channel();
            for _ in 0..num_jobs {
                let sample_inputs = Arc::clone(&sample_inputs);
                let normalizer = Arc::clone(&normalizer);
                let sender = sender.clone();
                thread_pool.execute(move || {
                    let mut num_parsed = 0;
                    for input in sample_inputs.iter() {
                        if normalizer.is_valid_format(input) && normalizer.parse_cnpj(input).is_ok()
                        {
                            num_parsed += 1;
                        }
                    }
                    let _ = sender.send(num_parsed);
                });
            }
            drop(sender);
            let total: usize = receiver.iter().sum();
            assert_eq!(total, num_jobs * sample_inputs.len() / 2);
        })
    });
}

/// Half valid, half invalid CNPJs
fn sample_inputs() -> Vec<String> {
    (0..500)
        .flat_map(|i| {
            [
                format!("12.345.{:03}/{:04}-95", i, i + 1),
                format!("12.345.{:03}/{:04}-9X", i, i + 1),
            ]
        })
        .collect()
}

criterion::criterion_group!(benches, multithread_normalization);

criterion::criterion_main!(benches);
