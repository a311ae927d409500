use super::*;
use std::sync::Arc;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn regions_render_with_their_label() {
    let buffer = SharedBuffer::default();
    let surface = ConsoleSurface::new(buffer.clone());

    surface.set_text(HolderKind::ObservableValue, "Live Data Triggered!");
    surface.set_text(HolderKind::ColdSequence, "Item 3");

    assert_eq!(
        buffer.contents(),
        "[observable value] Live Data Triggered!\n[cold sequence] Item 3\n"
    );
}

#[test]
fn notices_render_as_toasts() {
    let buffer = SharedBuffer::default();
    let surface = ConsoleSurface::new(buffer.clone());

    surface.notify("State Flow Triggered!");

    assert_eq!(buffer.contents(), "(toast) State Flow Triggered!\n");
}

struct UnflushableBuffer(Vec<u8>);

impl Write for UnflushableBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn flush_failure_keeps_rendering() {
    let surface = ConsoleSurface::new(UnflushableBuffer(Vec::new()));

    surface.set_text(HolderKind::EventStream, "Shared Flow Triggered!");
    surface.notify("Shared Flow Triggered!");

    let out = surface.out.into_inner().expect("buffer lock");
    assert_eq!(
        String::from_utf8(out.0).expect("utf8"),
        "[event stream] Shared Flow Triggered!\n(toast) Shared Flow Triggered!\n"
    );
}
