pub trait SteppableTask: Send + 'static {
    /// Runs one unit of work. Returning `false` ends the task.
    fn step(&mut self) -> bool;
}

/// A task running on its own thread until it finishes or is stopped.
pub struct ManagedTask {
    handle: std::thread::JoinHandle<()>,
    stop_sender: crossbeam_channel::Sender<()>,
}

impl ManagedTask {
    /// Spawns `task` on its own thread, stepping it and then waiting `delay`
    /// before the next step. Steps never overlap: the delay only starts once
    /// the previous step has returned.
    ///
    /// # Errors
    ///
    /// Returns the spawn error if the OS refuses to create the thread.
    pub fn spawn<T>(task: T, delay: std::time::Duration) -> std::io::Result<Self>
    where
        T: SteppableTask,
    {
        let (stop_sender, stop_receiver) = crossbeam_channel::bounded::<()>(1);

        let handle = std::thread::Builder::new()
            .name(std::any::type_name::<T>().to_string())
            .spawn(move || {
                run_task_with_delay(task, delay, &stop_receiver);
            })?;
        Ok(ManagedTask {
            handle,
            stop_sender,
        })
    }

    pub fn stop(&self) {
        log::info!("ManagedTask: Signaling task to stop...");
        let _ = self.stop_sender.try_send(());
    }

    pub fn wait_on_finish(self) {
        if self.handle.join().is_err() {
            log::error!("ManagedTask: Task panicked.");
        }
    }
}

fn run_task_with_delay<T: SteppableTask>(
    mut task: T,
    delay: std::time::Duration,
    stop_receiver: &crossbeam_channel::Receiver<()>,
) {
    loop {
        if !task.step() {
            break;
        }

        // Wait for the delay to pass OR a stop signal
        match stop_receiver.recv_timeout(delay) {
            Ok(()) | Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {}
        }
    }
}
