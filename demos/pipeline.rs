// In demos/pipeline.rs
//
// cargo run --example pipeline -- <num_messages> [producers] [consumers] [capacity]
use msgbuf::{BufferBuilder, Message, RemovalOrder, TextMessage};
use sha2::{Digest, Sha256};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

fn hash_hex(i: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("message_{}", i).as_bytes());
    format!("{:x}", hasher.finalize())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <num_messages> [producers] [consumers] [capacity]", args[0]);
        std::process::exit(1);
    }

    let num_messages: usize = args[1].parse()?;
    let producers: usize = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(2);
    let consumers: usize = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(2);
    let capacity: usize = args.get(4).map(|s| s.parse()).transpose()?.unwrap_or(16);
    if producers == 0 || consumers == 0 {
        return Err("need at least one producer and one consumer".into());
    }

    let (producer, consumer) = BufferBuilder::new()
        .with_capacity(capacity)
        .with_name("pipeline")
        .with_order(RemovalOrder::Fifo)
        .build_channel::<Option<TextMessage>>()?;

    let keep_alive = Arc::new(AtomicBool::new(true));
    let keep_alive_for_handler = Arc::clone(&keep_alive);

    // Handle Ctrl+C: producers stop early, consumers drain what was sent
    ctrlc::set_handler(move || {
        keep_alive_for_handler.store(false, Ordering::SeqCst);
    })?;

    println!(
        "Pipeline: {} messages, {} producers, {} consumers, capacity {}",
        num_messages, producers, consumers, capacity
    );
    let start = std::time::Instant::now();

    let mut producer_handles = Vec::with_capacity(producers);
    for p in 0..producers {
        let producer = producer.clone();
        let keep_alive = Arc::clone(&keep_alive);
        producer_handles.push(thread::spawn(move || {
            // Producer p takes every producers-th message starting at p
            for i in (p..num_messages).step_by(producers) {
                if !keep_alive.load(Ordering::SeqCst) {
                    break;
                }
                let message = format!("{}:{}", i, hash_hex(i));
                producer.send_blocking(Some(TextMessage::construct(&message)));
            }
            producer.sent()
        }));
    }

    let mut consumer_handles = Vec::with_capacity(consumers);
    for _ in 0..consumers {
        let consumer = consumer.clone();
        consumer_handles.push(thread::spawn(move || {
            let mut invalid = 0u64;
            // None is the end-of-stream marker
            while let Some(message) = consumer.receive_blocking() {
                let valid = message
                    .content()
                    .split_once(':')
                    .and_then(|(num, hash)| num.parse::<usize>().ok().map(|n| hash_hex(n) == hash))
                    .unwrap_or(false);
                if !valid {
                    invalid += 1;
                    eprintln!("Invalid message: {}", message);
                }
                message.destroy();
            }
            (consumer.received() - 1, invalid)
        }));
    }

    let mut sent = 0;
    for handle in producer_handles {
        sent += handle.join().map_err(|_| "producer thread panicked")?;
    }
    for _ in 0..consumers {
        producer.send_blocking(None);
    }

    let mut received = 0;
    let mut invalid = 0;
    for handle in consumer_handles {
        let (r, i) = handle.join().map_err(|_| "consumer thread panicked")?;
        received += r;
        invalid += i;
    }

    let elapsed = start.elapsed();
    println!("Pipeline: sent {}, received {}, invalid {} in {:.2?}", sent, received, invalid, elapsed);
    println!(
        "Pipeline: Throughput: {:.2} messages/sec",
        received as f64 / elapsed.as_secs_f64()
    );

    if sent == received && invalid == 0 {
        println!("All messages received successfully");
        Ok(())
    } else {
        Err("message loss or corruption detected".into())
    }
}
