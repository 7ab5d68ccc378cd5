use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Shared liveness flag for work that outlives the render that started it.
/// Clones observe the same flag; it only ever goes from mounted to unmounted.
#[derive(Clone, Debug)]
pub struct MountFlag(Rc<Cell<bool>>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }

    /// Runs `f` only while the owner is still mounted.
    pub fn run_if_mounted(&self, f: impl FnOnce()) -> bool {
        if self.is_mounted() {
            f();
            true
        } else {
            false
        }
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// A flag that flips to unmounted when the calling component is torn down.
#[hook]
pub fn use_mount_flag() -> MountFlag {
    let flag = use_memo(|_| MountFlag::new(), ());
    {
        let flag = (*flag).clone();
        use_effect_with_deps(move |_| move || flag.unmount(), ());
    }
    (*flag).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_see_unmount() {
        let flag = MountFlag::new();
        let task_copy = flag.clone();
        assert!(task_copy.is_mounted());

        flag.unmount();
        assert!(!task_copy.is_mounted());
    }

    #[test]
    fn deferred_work_is_skipped_after_unmount() {
        let flag = MountFlag::new();
        let writes = Rc::new(Cell::new(0));

        let pending = {
            let flag = flag.clone();
            let writes = writes.clone();
            move || flag.run_if_mounted(|| writes.set(writes.get() + 1))
        };

        flag.unmount();
        assert!(!pending());
        assert_eq!(writes.get(), 0);
    }

    #[test]
    fn deferred_work_runs_while_mounted() {
        let flag = MountFlag::new();
        let writes = Cell::new(0);
        assert!(flag.run_if_mounted(|| writes.set(1)));
        assert_eq!(writes.get(), 1);
    }
}
