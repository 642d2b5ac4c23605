use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use backprop_net::{Dataset, Network, NetworkConfig};

struct CountingAlloc {
    allocs: AtomicUsize,
    reallocs: AtomicUsize,
}

impl CountingAlloc {
    const fn new() -> Self {
        Self {
            allocs: AtomicUsize::new(0),
            reallocs: AtomicUsize::new(0),
        }
    }

    fn reset(&self) {
        self.allocs.store(0, Ordering::Relaxed);
        self.reallocs.store(0, Ordering::Relaxed);
    }

    fn alloc_events(&self) -> usize {
        self.allocs.load(Ordering::Relaxed) + self.reallocs.load(Ordering::Relaxed)
    }
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        self.allocs.fetch_add(1, Ordering::Relaxed);
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        self.allocs.fetch_add(1, Ordering::Relaxed);
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        self.reallocs.fetch_add(1, Ordering::Relaxed);
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static ALLOC: CountingAlloc = CountingAlloc::new();

fn make_dataset(len: usize, input_dim: usize, classes: usize) -> Dataset {
    let features = vec![0.1_f32; len * input_dim];
    let mut targets = vec![0.0_f32; len * classes];
    for i in 0..len {
        targets[i * classes + i % classes] = 1.0;
    }
    Dataset::from_flat(features, targets, input_dim, classes).unwrap()
}

#[test]
fn online_training_does_not_allocate_per_instance() {
    let base = Network::new_with_seed(&NetworkConfig::with_sizes(32, 64, 8), 0).unwrap();

    let small = make_dataset(4, 32, 8);
    let large = make_dataset(4 * 64, 32, 8);

    let mut net_small = base.clone();
    ALLOC.reset();
    for instance in small.iter() {
        net_small.train_on_instance(instance.features, instance.targets);
        net_small.classify(instance.features);
    }
    let alloc_small = ALLOC.alloc_events();

    let mut net_large = base;
    ALLOC.reset();
    for instance in large.iter() {
        net_large.train_on_instance(instance.features, instance.targets);
        net_large.classify(instance.features);
    }
    let alloc_large = ALLOC.alloc_events();

    assert_eq!(
        alloc_small, alloc_large,
        "expected allocation event count to be independent of instance count"
    );
}
