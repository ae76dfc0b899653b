//! End-to-end behaviour of observable chains through the public prelude.

use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc, Arc, Barrier, Mutex,
  },
  thread,
  time::Duration,
};

use rxcore::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Event<T> {
  Next(T),
  Error(String),
  Complete,
}

/// Records every notification it receives, in order.
struct Recorder<T> {
  events: Mutex<Vec<Event<T>>>,
  done: Mutex<Option<mpsc::Sender<()>>>,
}

impl<T> Recorder<T> {
  fn new() -> Arc<Self> { Arc::new(Recorder { events: Mutex::new(vec![]), done: Mutex::new(None) }) }

  fn with_signal() -> (Arc<Self>, mpsc::Receiver<()>) {
    let (tx, rx) = mpsc::channel();
    (Arc::new(Recorder { events: Mutex::new(vec![]), done: Mutex::new(Some(tx)) }), rx)
  }

  fn terminated(&self) {
    if let Some(tx) = self.done.lock().unwrap().take() {
      let _ = tx.send(());
    }
  }
}

impl<T: Clone> Recorder<T> {
  fn events(&self) -> Vec<Event<T>> { self.events.lock().unwrap().clone() }
}

impl<T: Send> Observer<T> for Recorder<T> {
  fn next(&self, value: T) { self.events.lock().unwrap().push(Event::Next(value)); }

  fn error(&self, err: RxError) {
    self.events.lock().unwrap().push(Event::Error(err.to_string()));
    self.terminated();
  }

  fn complete(&self) {
    self.events.lock().unwrap().push(Event::Complete);
    self.terminated();
  }
}

fn one_two_three() -> Observable<i32> {
  Observable::create(|o| {
    o.next(1);
    o.next(2);
    o.next(3);
    o.complete();
    Ok(())
  })
}

#[test]
fn order_preservation() {
  let rec = Recorder::<i32>::new();
  one_two_three().subscribe(rec.clone());
  assert_eq!(rec.events(), vec![Event::Next(1), Event::Next(2), Event::Next(3), Event::Complete]);
}

#[test]
fn terminal_exclusivity() {
  let rec = Recorder::<i32>::new();
  Observable::<i32>::create(|o| {
    o.next(1);
    o.error(RxError::msg("E"));
    o.next(2);
    o.complete();
    Ok(())
  })
  .subscribe(rec.clone());

  assert_eq!(rec.events(), vec![Event::Next(1), Event::Error("E".to_owned())]);
}

#[test]
fn map_law() {
  let rec = Recorder::<i32>::new();
  one_two_three().map(|v| v * v + 1).subscribe(rec.clone());
  assert_eq!(rec.events(), vec![Event::Next(2), Event::Next(5), Event::Next(10), Event::Complete]);

  let rec = Recorder::<i32>::new();
  Observable::<i32>::throw(RxError::msg("boom")).map(|v| v + 1).subscribe(rec.clone());
  assert_eq!(rec.events(), vec![Event::Error("boom".to_owned())]);
}

#[test]
fn filter_law() {
  let rec = Recorder::<i32>::new();
  Observable::from_iter(vec![1, 2, 3, 4]).filter(|v| *v % 2 == 0).subscribe(rec.clone());
  assert_eq!(rec.events(), vec![Event::Next(2), Event::Next(4), Event::Complete]);
}

#[test]
fn flat_map_law() {
  let rec = Recorder::<i32>::new();
  Observable::from_iter(vec![1, 2])
    .flat_map(|i| Observable::from_iter(vec![i * 10, i * 100]))
    .subscribe(rec.clone());
  assert_eq!(
    rec.events(),
    vec![Event::Next(10), Event::Next(100), Event::Next(20), Event::Next(200), Event::Complete]
  );
}

#[test]
fn disposal_stops_delivery() {
  let received = Arc::new(Mutex::new(vec![]));
  let completed = Arc::new(AtomicUsize::new(0));
  let (c_received, c_completed) = (received.clone(), completed.clone());
  let consumer = Arc::new(DisposableObserver::from_fns(
    move |v: i32, this: &dyn Disposable| {
      c_received.lock().unwrap().push(v);
      if v == 3 {
        this.dispose();
      }
    },
    move |_: &dyn Disposable| {
      c_completed.fetch_add(1, Ordering::SeqCst);
    },
    |_, _: &dyn Disposable| {},
  ));

  let handle = Observable::<i32>::create(|o| {
    for i in 1..=10 {
      if o.is_disposed() {
        return Ok(());
      }
      o.next(i);
    }
    o.complete();
    Ok(())
  })
  .subscribe_with(consumer);

  assert_eq!(*received.lock().unwrap(), vec![1, 2, 3]);
  assert_eq!(completed.load(Ordering::SeqCst), 0);
  assert!(handle.is_disposed());
}

#[test]
fn single_fire_error_handling() {
  let handled = Arc::new(AtomicUsize::new(0));
  let c_handled = handled.clone();
  let consumer = Arc::new(DisposableObserver::from_fns(
    |_: i32, _: &dyn Disposable| {},
    |_: &dyn Disposable| {},
    move |_, _: &dyn Disposable| {
      c_handled.fetch_add(1, Ordering::SeqCst);
    },
  ));

  let handle = Observable::<i32>::create(|o| {
    o.error(RxError::msg("one"));
    o.error(RxError::msg("two"));
    Ok(())
  })
  .subscribe_with(consumer);

  assert_eq!(handled.load(Ordering::SeqCst), 1);
  assert!(handle.is_disposed());
}

#[test]
fn cold_re_run() {
  let runs = Arc::new(AtomicUsize::new(0));
  let c_runs = runs.clone();
  let source = Observable::<i32>::create(move |o| {
    c_runs.fetch_add(1, Ordering::SeqCst);
    o.complete();
    Ok(())
  });

  source.subscribe(Recorder::<i32>::new());
  source.map(|v| v + 1).subscribe(Recorder::<i32>::new());
  assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn subscription_fault_is_delivered_unless_disposed() {
  let rec = Recorder::<i32>::new();
  Observable::<i32>::create(|_| Err(RxError::msg("sync"))).subscribe(rec.clone());
  assert_eq!(rec.events(), vec![Event::Error("sync".to_owned())]);

  let handled = Arc::new(AtomicUsize::new(0));
  let c_handled = handled.clone();
  let consumer = Arc::new(DisposableObserver::from_fns(
    |_: i32, _: &dyn Disposable| {},
    |_: &dyn Disposable| {},
    move |_, _: &dyn Disposable| {
      c_handled.fetch_add(1, Ordering::SeqCst);
    },
  ));
  consumer.dispose();
  Observable::<i32>::create(|_| panic!("ignored")).subscribe_with(consumer);
  assert_eq!(handled.load(Ordering::SeqCst), 0);
}

// Known gap: map and filter do not catch faults from their closures, while
// flat_map catches faults from its factory. Both end up as an `error`, but a
// map/filter fault unwinds through the producer and cuts it short.
#[test]
fn map_filter_faults_unwind_producer_but_flat_map_does_not() {
  let produced = Arc::new(AtomicUsize::new(0));
  let c_produced = produced.clone();
  let source = Observable::<i32>::create(move |o| {
    for i in 1..=3 {
      c_produced.fetch_add(1, Ordering::SeqCst);
      o.next(i);
    }
    o.complete();
    Ok(())
  });

  let rec = Recorder::<i32>::new();
  source.filter(|v| if *v == 2 { panic!("predicate") } else { true }).subscribe(rec.clone());
  assert_eq!(rec.events(), vec![Event::Next(1), Event::Error("panicked: predicate".to_owned())]);
  assert_eq!(produced.swap(0, Ordering::SeqCst), 2);

  let rec = Recorder::<i32>::new();
  source
    .flat_map(|v| -> Observable<i32> {
      if v == 2 {
        panic!("factory");
      }
      Observable::of(v)
    })
    .subscribe(rec.clone());
  assert_eq!(rec.events(), vec![Event::Next(1), Event::Error("panicked: factory".to_owned())]);
  assert_eq!(produced.load(Ordering::SeqCst), 3);
}

#[cfg(feature = "futures-scheduler")]
#[test]
fn subscribe_on_does_not_block() {
  let scheduler = SingleThreadScheduler::new().unwrap();
  let barrier = Arc::new(Barrier::new(2));
  let c_barrier = barrier.clone();
  let (rec, done) = Recorder::<i32>::with_signal();

  // The producer cannot emit until the caller reaches the barrier, which it
  // only does after `subscribe` has returned.
  Observable::<i32>::create(move |o| {
    c_barrier.wait();
    o.next(1);
    o.complete();
    Ok(())
  })
  .subscribe_on(scheduler)
  .subscribe(rec.clone());

  assert!(rec.events().is_empty());
  barrier.wait();
  done.recv_timeout(Duration::from_secs(5)).unwrap();
  assert_eq!(rec.events(), vec![Event::Next(1), Event::Complete]);
}

#[cfg(feature = "futures-scheduler")]
#[test]
fn observe_on_single_worker_order() {
  let scheduler = SingleThreadScheduler::new().unwrap();
  let threads = Arc::new(Mutex::new(vec![]));
  let c_threads = threads.clone();
  let (rec, done) = Recorder::<i32>::with_signal();
  let c_rec = rec.clone();

  one_two_three()
    .observe_on(scheduler)
    .subscribe(observer::from_fn(
      move |v: i32| {
        c_threads.lock().unwrap().push(thread::current().id());
        c_rec.next(v);
      },
      {
        let rec = rec.clone();
        move |e| rec.error(e)
      },
      {
        let rec = rec.clone();
        move || rec.complete()
      },
    ));

  done.recv_timeout(Duration::from_secs(5)).unwrap();
  assert_eq!(rec.events(), vec![Event::Next(1), Event::Next(2), Event::Next(3), Event::Complete]);
  assert!(threads.lock().unwrap().iter().all(|id| *id != thread::current().id()));
}

#[cfg(feature = "futures-scheduler")]
#[test]
fn full_chain_across_schedulers() {
  let subscribe_scheduler = NewThreadScheduler::new();
  let observe_scheduler = SingleThreadScheduler::with_name("rx-chain").unwrap();
  let (rec, done) = Recorder::<i32>::with_signal();

  Observable::from_iter(1..=20)
    .subscribe_on(subscribe_scheduler)
    .filter(|v| *v % 3 == 0)
    .flat_map(|v| Observable::from_iter(vec![v, -v]))
    .map(|v| v * 2)
    .observe_on(observe_scheduler)
    .subscribe(rec.clone());

  done.recv_timeout(Duration::from_secs(5)).unwrap();
  let mut expected: Vec<_> = (1..=20)
    .filter(|v| v % 3 == 0)
    .flat_map(|v| vec![v * 2, -v * 2])
    .map(Event::Next)
    .collect();
  expected.push(Event::Complete);
  assert_eq!(rec.events(), expected);
}

#[cfg(feature = "futures-scheduler")]
#[test]
fn panicking_task_is_logged_and_worker_survives() {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();
  let scheduler = SingleThreadScheduler::new().unwrap();
  scheduler.schedule(Box::new(|| panic!("faulty unit of work")));

  let (rec, done) = Recorder::<i32>::with_signal();
  Observable::of(7).observe_on(scheduler).subscribe(rec.clone());
  done.recv_timeout(Duration::from_secs(5)).unwrap();
  assert_eq!(rec.events(), vec![Event::Next(7), Event::Complete]);
}

#[cfg(feature = "tokio-scheduler")]
#[tokio::test(flavor = "multi_thread")]
async fn tokio_handle_as_scheduler() {
  let handle = tokio::runtime::Handle::current();
  let (rec, done) = Recorder::<i32>::with_signal();
  Observable::from_iter(vec![1, 2]).subscribe_on(handle).subscribe(rec.clone());

  tokio::task::spawn_blocking(move || done.recv_timeout(Duration::from_secs(5)))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(rec.events(), vec![Event::Next(1), Event::Next(2), Event::Complete]);
}
