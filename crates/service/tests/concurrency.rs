use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use models::Car;
use service::{CarService, CarStore, InMemoryCarStore, ServiceError};

fn car(id: &str, mileage: i64) -> Car {
    Car { id: id.into(), make: "Tesla".into(), model: "Model Y".into(), mileage, ..Car::default() }
}

#[test]
fn concurrent_saves_on_distinct_keys_lose_nothing() -> anyhow::Result<()> {
    const N: usize = 64;
    let store = Arc::new(InMemoryCarStore::new());

    thread::scope(|s| {
        for i in 0..N {
            let store = Arc::clone(&store);
            s.spawn(move || {
                let id = format!("car-{i}");
                store.save(&id, car(&id, i as i64)).expect("save");
            });
        }
    });

    let all = store.get_all()?;
    assert_eq!(all.len(), N);
    let ids: HashSet<String> = all.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids.len(), N);
    for i in 0..N {
        assert!(ids.contains(&format!("car-{i}")));
    }
    Ok(())
}

#[test]
fn concurrent_creates_through_service_get_unique_ids() -> anyhow::Result<()> {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;
    let svc = Arc::new(CarService::new(Arc::new(InMemoryCarStore::new())));

    let ids: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let svc = Arc::clone(&svc);
                s.spawn(move || {
                    (0..PER_THREAD)
                        .map(|_| svc.create_car(Car::default()).expect("create").id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().expect("join")).collect()
    });

    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
    assert_eq!(svc.get_cars()?.len(), THREADS * PER_THREAD);
    Ok(())
}

#[test]
fn update_racing_delete_never_resurrects_the_record() -> anyhow::Result<()> {
    // update 与 delete 并发时，记录要么被删除，要么是某次完整的更新结果
    for round in 0..200 {
        let store = Arc::new(InMemoryCarStore::new());
        store.save("1", car("1", 0))?;

        let (upd, del) = thread::scope(|s| {
            let u = {
                let store = Arc::clone(&store);
                s.spawn(move || store.update("1", car("1", round)))
            };
            let d = {
                let store = Arc::clone(&store);
                s.spawn(move || store.delete("1"))
            };
            (u.join().expect("join update"), d.join().expect("join delete"))
        });

        assert!(del?);
        match upd {
            Ok(_) | Err(ServiceError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }
        assert!(store.get("1").unwrap_err().is_not_found());
    }
    Ok(())
}

#[test]
fn concurrent_updates_on_one_key_leave_a_whole_record() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryCarStore::new());
    store.save("1", car("1", 0))?;

    thread::scope(|s| {
        for i in 1..=16 {
            let store = Arc::clone(&store);
            s.spawn(move || {
                let c = Car { color: format!("c{i}"), mileage: i, ..car("1", i) };
                store.update("1", c).expect("update");
            });
        }
    });

    let last = store.get("1")?;
    assert_eq!(last.color, format!("c{}", last.mileage));
    assert_eq!(store.get_all()?.len(), 1);
    Ok(())
}
