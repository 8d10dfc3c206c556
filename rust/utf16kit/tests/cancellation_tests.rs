use std::{
    io::Read,
    sync::mpsc,
    thread,
    time::Duration,
};

use utf16kit::{CancelReason, CancellationToken, ErrorKind, convert_utf16_to_utf8};

/// An endless UTF-16LE stream: a BOM followed by 'a' forever. Reports the first
/// read through `started`.
struct Endless {
    bom_sent: bool,
    started: Option<mpsc::Sender<()>>,
}

impl Read for Endless {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if let Some(started) = self.started.take() {
            let _ = started.send(());
        }
        let mut n = 0;
        if !self.bom_sent && buf.len() >= 2 {
            buf[..2].copy_from_slice(&[0xFF, 0xFE]);
            self.bom_sent = true;
            n = 2;
        }
        while n + 2 <= buf.len() {
            buf[n..n + 2].copy_from_slice(&[b'a', 0x00]);
            n += 2;
        }
        Ok(n)
    }
}

#[test]
fn test_cancel_from_another_thread() {
    let token = CancellationToken::new();
    let (started_tx, started_rx) = mpsc::channel();

    let worker = {
        let token = token.clone();
        thread::spawn(move || {
            let mut src = Endless {
                bom_sent: false,
                started: Some(started_tx),
            };
            let mut out = Vec::new();
            let err = convert_utf16_to_utf8(&mut src, &mut out, false, &token).unwrap_err();
            (err, out)
        })
    };

    started_rx.recv().unwrap();
    token.cancel();
    let (err, out) = worker.join().unwrap();
    assert!(matches!(
        err.kind(),
        ErrorKind::Cancelled {
            reason: CancelReason::Cancelled
        }
    ));
    assert!(out.iter().all(|&b| b == b'a'));
}

#[test]
fn test_timeout() {
    let token = CancellationToken::with_timeout(Duration::from_millis(20));
    let mut src = Endless {
        bom_sent: false,
        started: None,
    };
    let mut out = Vec::new();
    let err = convert_utf16_to_utf8(&mut src, &mut out, true, &token).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Cancelled {
            reason: CancelReason::DeadlineExceeded
        }
    ));
    assert_eq!(&out[..3], [0xEF, 0xBB, 0xBF]);
}

#[test]
fn test_independent_conversions_in_parallel() {
    let inputs: Vec<String> = (0..4)
        .map(|i| format!("worker {i}: ").repeat(500) + "終わり 😀")
        .collect();
    let handles: Vec<_> = inputs
        .iter()
        .cloned()
        .map(|text| {
            thread::spawn(move || {
                let mut utf16 = Vec::new();
                utf16kit::utf8_to_utf16(&mut text.as_bytes(), &mut utf16).unwrap();
                utf16kit::utf16_to_string(&mut &utf16[..]).unwrap()
            })
        })
        .collect();
    for (handle, text) in handles.into_iter().zip(&inputs) {
        assert_eq!(&handle.join().unwrap(), text);
    }
}
