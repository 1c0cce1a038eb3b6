use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use reqwest::StatusCode;
use serde_json::{Value, json};

// Runs against a live server: `ROOMBOOK_HOST`/`ROOMBOOK_PORT`.

const DAY_MINUTES: u32 = 24 * 60;

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn percentile(sorted: &[Duration], p: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() as f64) * p / 100.0) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn print_latency(label: &str, latencies: &mut [Duration]) {
    if latencies.is_empty() {
        println!("  {label}: no samples");
        return;
    }
    latencies.sort();
    let total: Duration = latencies.iter().sum();
    let avg = total / latencies.len() as u32;
    println!("  {label}:");
    println!(
        "    n={}, avg={:.2}ms, p50={:.2}ms, p95={:.2}ms, p99={:.2}ms, max={:.2}ms",
        latencies.len(),
        avg.as_secs_f64() * 1000.0,
        percentile(latencies, 50.0).as_secs_f64() * 1000.0,
        percentile(latencies, 95.0).as_secs_f64() * 1000.0,
        percentile(latencies, 99.0).as_secs_f64() * 1000.0,
        latencies[latencies.len() - 1].as_secs_f64() * 1000.0,
    );
}

#[derive(Clone)]
struct Target {
    http: reqwest::Client,
    base: String,
    /// Unique per run so repeated runs against one server don't collide.
    run: String,
}

impl Target {
    fn date(&self, n: usize) -> String {
        format!("{}-{n}", self.run)
    }

    async fn create_room(&self, name: &str) -> u64 {
        let resp: Value = self
            .http
            .post(format!("{}/create-room", self.base))
            .json(&json!({"roomName": name, "seats": 8, "amenities": [], "pricePerHour": 10}))
            .send()
            .await
            .expect("create-room failed")
            .json()
            .await
            .expect("create-room body");
        resp["room"]["id"].as_u64().expect("room id")
    }

    async fn book(&self, customer: &str, room: u64, date: &str, start: u32, end: u32) -> StatusCode {
        self.http
            .post(format!("{}/book-room", self.base))
            .json(&json!({
                "customerName": customer,
                "roomId": room,
                "date": date,
                "startTime": hhmm(start),
                "endTime": hhmm(end),
            }))
            .send()
            .await
            .expect("book-room failed")
            .status()
    }
}

async fn phase1_sequential(target: &Target, room: u64) {
    let n = 1000;
    let mut latencies = Vec::with_capacity(n);
    let start = Instant::now();

    for i in 0..n {
        // 48 half-hour slots per date, then move to the next date
        let date = target.date(i / 48);
        let s = (i % 48) as u32 * 30;
        let t = Instant::now();
        let status = target.book("seq", room, &date, s, s + 30).await;
        assert_eq!(status, StatusCode::CREATED);
        latencies.push(t.elapsed());
    }

    let elapsed = start.elapsed();
    let ops = n as f64 / elapsed.as_secs_f64();
    println!("  {n} bookings in {:.2}s = {ops:.0} ops/sec", elapsed.as_secs_f64());
    print_latency("write latency", &mut latencies);
}

async fn phase2_contended(target: &Target, room: u64) {
    let n_tasks = 20;
    let n_per_task = 100;
    let created = Arc::new(AtomicUsize::new(0));
    let conflicts = Arc::new(AtomicUsize::new(0));

    let start = Instant::now();
    let mut handles = Vec::new();
    for task in 0..n_tasks {
        let target = target.clone();
        let created = created.clone();
        let conflicts = conflicts.clone();
        handles.push(tokio::spawn(async move {
            let date = target.date(10_000);
            for j in 0..n_per_task {
                // every task walks the same day with a different stride
                let s = ((task * 37 + j * 53) as u32 * 5) % (DAY_MINUTES - 60);
                if target.book("contended", room, &date, s, s + 45).await == StatusCode::CREATED {
                    created.fetch_add(1, Ordering::Relaxed);
                } else {
                    conflicts.fetch_add(1, Ordering::Relaxed);
                }
            }
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let elapsed = start.elapsed();
    let total = n_tasks * n_per_task;
    println!(
        "  {total} attempts in {:.2}s = {:.0} ops/sec, {} created, {} rejected",
        elapsed.as_secs_f64(),
        total as f64 / elapsed.as_secs_f64(),
        created.load(Ordering::Relaxed),
        conflicts.load(Ordering::Relaxed),
    );
}

async fn phase3_read_under_load(target: &Target, room: u64) {
    let stop = Arc::new(AtomicBool::new(false));
    let mut writer_handles = Vec::new();
    for w in 0..4 {
        let target = target.clone();
        let stop = stop.clone();
        writer_handles.push(tokio::spawn(async move {
            let mut i = 0usize;
            while !stop.load(Ordering::Relaxed) {
                let date = target.date(20_000 + w * 1000 + i / 48);
                let s = (i % 48) as u32 * 30;
                let _ = target.book("writer", room, &date, s, s + 30).await;
                i += 1;
            }
        }));
    }

    let n_readers = 8;
    let reads_per_reader = 200;
    let mut reader_handles = Vec::new();
    for _ in 0..n_readers {
        let target = target.clone();
        reader_handles.push(tokio::spawn(async move {
            let mut latencies = Vec::with_capacity(reads_per_reader);
            for _ in 0..reads_per_reader {
                let t = Instant::now();
                let resp = target
                    .http
                    .get(format!("{}/customer-statistics", target.base))
                    .send()
                    .await
                    .expect("statistics failed");
                assert!(resp.status().is_success());
                let _ = resp.bytes().await;
                latencies.push(t.elapsed());
            }
            latencies
        }));
    }

    let mut all = Vec::new();
    for h in reader_handles {
        all.extend(h.await.unwrap());
    }
    stop.store(true, Ordering::Relaxed);
    for h in writer_handles {
        let _ = h.await;
    }
    print_latency("statistics latency", &mut all);
}

async fn audit_no_overlaps(target: &Target) {
    let body: Value = target
        .http
        .get(format!("{}/booked-rooms", target.base))
        .send()
        .await
        .expect("booked-rooms failed")
        .json()
        .await
        .expect("booked-rooms body");
    let booked = body["bookedRooms"].as_array().expect("bookedRooms array");

    let mut by_key: std::collections::HashMap<(String, String), Vec<(String, String)>> =
        std::collections::HashMap::new();
    for b in booked {
        let key = (b["roomName"].to_string(), b["date"].to_string());
        let slot = (b["startTime"].to_string(), b["endTime"].to_string());
        by_key.entry(key).or_default().push(slot);
    }

    let mut overlaps = 0;
    for slots in by_key.values_mut() {
        // "HH:MM" strings order the same way as the times they encode
        slots.sort();
        for pair in slots.windows(2) {
            if pair[1].0 < pair[0].1 {
                overlaps += 1;
            }
        }
    }
    println!("  {} bookings audited, {overlaps} overlaps", booked.len());
    assert_eq!(overlaps, 0, "ledger holds overlapping bookings");
}

#[tokio::main]
async fn main() {
    let host = std::env::var("ROOMBOOK_HOST").unwrap_or_else(|_| "127.0.0.1".into());
    let port: u16 = std::env::var("ROOMBOOK_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid ROOMBOOK_PORT");

    let run = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let target = Target {
        http: reqwest::Client::new(),
        base: format!("http://{host}:{port}"),
        run: format!("bench{run}"),
    };

    println!("=== roombook stress benchmark ===");
    println!("target: {}\n", target.base);

    println!("[setup]");
    let rooms = [
        target.create_room("bench-seq").await,
        target.create_room("bench-hot").await,
        target.create_room("bench-read").await,
    ];
    println!("  created {} rooms", rooms.len());

    println!("\n[phase 1] sequential write throughput");
    phase1_sequential(&target, rooms[0]).await;

    println!("\n[phase 2] contended writes on one room");
    phase2_contended(&target, rooms[1]).await;

    println!("\n[phase 3] read latency under write load");
    phase3_read_under_load(&target, rooms[2]).await;

    println!("\n[audit] no overlapping bookings");
    audit_no_overlaps(&target).await;

    println!("\n=== benchmark complete ===");
}
