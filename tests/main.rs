use std::path::{Path, PathBuf};

use voice_gender::batch::{classify_file, scan_directory, scan_directory_with, ScanOutcome};
use voice_gender::classifier::hps::HpsClassifier;
use voice_gender::classifier::{GenderClassifier, Label};
use voice_gender::float::Float;
use voice_gender::io::normalize_peak;
use voice_gender::utils::buffer::new_real_buffer;

// For writing `.wav` fixtures
use hound;

const SAMPLE_RATE: usize = 16000;

#[test]
fn silence_one_second() {
    let signal = new_real_buffer::<f64>(SAMPLE_RATE);
    assert_eq!(voice_gender::classify(&signal, SAMPLE_RATE), Label::Female);
}

#[test]
fn silence_any_length() {
    let mut classifier = HpsClassifier::<f64>::new();
    for len in [0, 1, 2047, 2048, 4096, 10_000] {
        let signal = new_real_buffer::<f64>(len);
        assert_eq!(classifier.classify(&signal, SAMPLE_RATE), Label::Female);
    }
}

#[test]
fn sin_120_one_second() {
    let signal = sin_wave::<f64>(120.0, SAMPLE_RATE, SAMPLE_RATE);
    assert_eq!(voice_gender::classify(&signal, SAMPLE_RATE), Label::Male);
}

#[test]
fn sin_120_single_window() {
    let signal = sin_wave::<f64>(120.0, 2048, SAMPLE_RATE);
    assert_eq!(voice_gender::classify(&signal, SAMPLE_RATE), Label::Male);
}

#[test]
fn voiced_220_one_second() {
    voiced_frequency(220.0, Label::Female);
}

#[test]
fn voiced_low_voices() {
    voiced_frequency(110.0, Label::Male);
    voiced_frequency(120.0, Label::Male);
}

#[test]
fn voiced_high_voices() {
    voiced_frequency(210.0, Label::Female);
    voiced_frequency(240.0, Label::Female);
}

/// A pure 220 Hz tone carries no harmonics. Its peak at bin 28 is reached by the
/// second-harmonic factor of male bin 14, while female bin 28 only collects leakage
/// from 56, 84 and 112, so the male band wins.
#[test]
fn pure_sin_220_leaks_into_male_band() {
    let signal = sin_wave::<f64>(220.0, SAMPLE_RATE, SAMPLE_RATE);
    let energy = HpsClassifier::<f64>::new().band_energy(&signal, SAMPLE_RATE);
    assert!(energy.male > energy.female);
    assert_eq!(energy.decide(), Label::Male);
}

#[test]
fn deterministic() {
    let signal = voiced_wave::<f64>(180.0, SAMPLE_RATE, SAMPLE_RATE);
    let mut classifier = HpsClassifier::<f64>::new();
    let first = classifier.band_energy(&signal, SAMPLE_RATE);
    let second = classifier.band_energy(&signal, SAMPLE_RATE);
    assert_eq!(first, second);
    assert_eq!(
        classifier.classify(&signal, SAMPLE_RATE),
        HpsClassifier::<f64>::new().classify(&signal, SAMPLE_RATE)
    );
}

#[test]
fn f32_agrees_with_f64() {
    for (freq, expected) in [(120.0, Label::Male), (220.0, Label::Female)] {
        let signal = voiced_wave::<f32>(freq, SAMPLE_RATE, SAMPLE_RATE);
        let mut classifier = HpsClassifier::<f32>::new();
        assert_eq!(classifier.classify(&signal, SAMPLE_RATE), expected);
    }
}

#[test]
fn classify_stereo_file_uses_first_channel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereo.wav");
    let left = voiced_wave::<f64>(120.0, SAMPLE_RATE, SAMPLE_RATE);
    let right = voiced_wave::<f64>(220.0, SAMPLE_RATE, SAMPLE_RATE);
    write_wav(&path, &[left, right], SAMPLE_RATE);

    let mut classifier = HpsClassifier::new();
    assert_eq!(classify_file(&path, &mut classifier).unwrap(), Label::Male);
}

#[test]
fn batch_accuracy() {
    let dir = tempfile::tempdir().unwrap();
    let low = voiced_wave::<f64>(120.0, SAMPLE_RATE, SAMPLE_RATE);
    let high = voiced_wave::<f64>(220.0, SAMPLE_RATE, SAMPLE_RATE);

    // Expected M, M, K; predicted M, K, K.
    write_wav(&dir.path().join("a_m.wav"), &[low.clone()], SAMPLE_RATE);
    write_wav(&dir.path().join("b_m.wav"), &[high.clone()], SAMPLE_RATE);
    write_wav(&dir.path().join("c_K.WAV"), &[high.clone()], SAMPLE_RATE);
    // No label marker, not a wav, and a labelled file that does not decode.
    write_wav(&dir.path().join("notes.wav"), &[low], SAMPLE_RATE);
    std::fs::write(dir.path().join("readme_m.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("d_k.wav"), "not audio").unwrap();

    let mut classifier = HpsClassifier::new();
    let report = match scan_directory(dir.path(), &mut classifier).unwrap() {
        ScanOutcome::Scored(report) => report,
        other => panic!("Unexpected outcome {:?}", other),
    };

    let names: Vec<&str> = report.entries.iter().map(|e| e.file_name.as_str()).collect();
    assert_eq!(names, vec!["a_m.wav", "b_m.wav", "c_K.WAV"]);
    let predicted: Vec<Label> = report.entries.iter().map(|e| e.predicted).collect();
    assert_eq!(predicted, vec![Label::Male, Label::Female, Label::Female]);

    assert_eq!((report.correct, report.total), (2, 3));
    assert_eq!(report.summary_line(), "Accuracy: 66.67%  (2/3)");
}

#[test]
fn batch_reports_each_file_as_it_is_scored() {
    let dir = tempfile::tempdir().unwrap();
    let low = voiced_wave::<f64>(120.0, 4096, SAMPLE_RATE);
    let high = voiced_wave::<f64>(220.0, 4096, SAMPLE_RATE);
    write_wav(&dir.path().join("b_k.wav"), &[high], SAMPLE_RATE);
    write_wav(&dir.path().join("a_m.wav"), &[low], SAMPLE_RATE);

    let mut lines = Vec::new();
    let mut classifier = HpsClassifier::new();
    let outcome = scan_directory_with(dir.path(), &mut classifier, |entry| {
        lines.push(entry.to_string())
    })
    .unwrap();

    assert_eq!(
        lines,
        vec![
            "a_m.wav: expected M, recognized M",
            "b_k.wav: expected K, recognized K"
        ]
    );
    match outcome {
        ScanOutcome::Scored(report) => assert_eq!(report.entries.len(), lines.len()),
        other => panic!("Unexpected outcome {:?}", other),
    }
}

#[test]
fn batch_without_wav_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a_m.txt"), "hello").unwrap();

    let mut classifier = HpsClassifier::new();
    assert_eq!(
        scan_directory(dir.path(), &mut classifier).unwrap(),
        ScanOutcome::NoWavFiles
    );
}

#[test]
fn batch_without_labels() {
    let dir = tempfile::tempdir().unwrap();
    let low = voiced_wave::<f64>(120.0, 4096, SAMPLE_RATE);
    write_wav(&dir.path().join("recording.wav"), &[low], SAMPLE_RATE);

    let mut classifier = HpsClassifier::new();
    match scan_directory(dir.path(), &mut classifier).unwrap() {
        ScanOutcome::Scored(report) => {
            assert_eq!(report.total, 0);
            assert!(report.summary_line().starts_with("No files recognized"));
        }
        other => panic!("Unexpected outcome {:?}", other),
    }
}

#[test]
fn batch_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing: PathBuf = dir.path().join("nope");

    let mut classifier = HpsClassifier::new();
    assert!(scan_directory(&missing, &mut classifier).is_err());
}

fn voiced_frequency(freq: f64, expected: Label) {
    let signal = voiced_wave::<f64>(freq, SAMPLE_RATE, SAMPLE_RATE);
    let mut classifier = HpsClassifier::new();
    let energy = classifier.band_energy(&signal, SAMPLE_RATE);
    println!(
        "{} Hz: male {:e}, female {:e}",
        freq, energy.male, energy.female
    );
    assert_eq!(energy.decide(), expected);
}

fn sin_wave<T: Float>(freq: f64, size: usize, sample_rate: usize) -> Vec<T> {
    let mut signal = new_real_buffer(size);
    let two_pi = 2.0 * std::f64::consts::PI;
    let dx = two_pi * freq / sample_rate as f64;
    for i in 0..size {
        let x = i as f64 * dx;
        let y = x.sin();
        signal[i] = T::from(y).unwrap();
    }
    signal
}

/// A crude voiced sound: the fundamental plus harmonics 2-4 at falling amplitude,
/// peak-normalized.
fn voiced_wave<T: Float>(freq: f64, size: usize, sample_rate: usize) -> Vec<T> {
    let two_pi = 2.0 * std::f64::consts::PI;
    let dx = two_pi * freq / sample_rate as f64;
    let mut signal: Vec<f64> = (0..size)
        .map(|i| {
            (1..=4)
                .map(|h| (i as f64 * dx * h as f64).sin() / h as f64)
                .sum::<f64>()
        })
        .collect();
    normalize_peak(&mut signal);
    signal.into_iter().map(|y| T::from(y).unwrap()).collect()
}

/// Write 16-bit PCM with one slice per channel.
fn write_wav(path: &Path, channels: &[Vec<f64>], sample_rate: usize) {
    let spec = hound::WavSpec {
        channels: channels.len() as u16,
        sample_rate: sample_rate as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..channels[0].len() {
        for channel in channels {
            let sample = (channel[i] * 0.8 * i16::MAX as f64).round() as i16;
            writer.write_sample(sample).unwrap();
        }
    }
    writer.finalize().unwrap();
}
