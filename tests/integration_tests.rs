use phone_extract::domain::ports::Pipeline;
use phone_extract::{
    Delivery, ExtractionEngine, ExtractionPipeline, InputSource, LocalStorage, Mode, RunSettings,
    TomlConfig,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn settings(output: Option<PathBuf>) -> RunSettings {
    RunSettings::resolve(&TomlConfig::default(), output.as_deref(), None, false)
}

fn strings(phones: &[phone_extract::PhoneNumber]) -> Vec<&str> {
    phones.iter().map(|p| p.as_str()).collect()
}

#[tokio::test]
async fn test_end_to_end_from_files_to_console() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.txt");
    std::fs::write(&first, "Менеджер: 8-913-111-22-33\nСклад: 8 (495) 000-11-22").unwrap();
    std::fs::write(&second, "Повтор: +7(913)111-22-33, новый: 9161234567").unwrap();

    let pipeline = ExtractionPipeline::new(
        LocalStorage::new(),
        settings(None),
        Mode::Files,
        vec![InputSource::File(first), InputSource::File(second)],
    );
    let report = ExtractionEngine::new(pipeline).run().await.unwrap();

    assert_eq!(
        strings(&report.phones),
        vec!["+7(913)111-22-33", "+7(495)000-11-22", "+7(916)123-45-67"]
    );
    assert_eq!(report.delivery, Delivery::Console);
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn test_end_to_end_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("out").join("phones.txt");
    std::fs::write(
        &input,
        "Звоните: +7 (912) 345-67-89 или 8 912 345 67 89 или просто 89123456789.",
    )
    .unwrap();

    let pipeline = ExtractionPipeline::new(
        LocalStorage::new(),
        settings(Some(output.clone())),
        Mode::File,
        vec![InputSource::File(input)],
    );
    let report = ExtractionEngine::new(pipeline).run().await.unwrap();

    assert_eq!(
        report.delivery,
        Delivery::File {
            path: output.clone(),
            saved: true
        }
    );
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "+7(912)345-67-89\n"
    );
}

#[tokio::test]
async fn test_end_to_end_missing_file_does_not_abort_run() {
    let temp_dir = TempDir::new().unwrap();
    let present = temp_dir.path().join("present.txt");
    let missing = temp_dir.path().join("deleted.txt");
    std::fs::write(&present, "89130000001").unwrap();

    let pipeline = ExtractionPipeline::new(
        LocalStorage::new(),
        settings(None),
        Mode::Files,
        vec![InputSource::File(missing.clone()), InputSource::File(present)],
    );
    let report = ExtractionEngine::new(pipeline).run().await.unwrap();

    assert_eq!(strings(&report.phones), vec!["+7(913)000-00-01"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].input, missing.display().to_string());
}

#[tokio::test]
async fn test_unwritable_output_keeps_results() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    std::fs::write(&input, "89130000001").unwrap();
    // A directory cannot be overwritten as a file.
    let output = temp_dir.path().to_path_buf();

    let pipeline = ExtractionPipeline::new(
        LocalStorage::new(),
        settings(Some(output)),
        Mode::File,
        vec![InputSource::File(input)],
    );
    let report = ExtractionEngine::new(pipeline).run().await.unwrap();

    assert_eq!(strings(&report.phones), vec!["+7(913)000-00-01"]);
    assert!(matches!(report.delivery, Delivery::File { saved: false, .. }));
}

#[tokio::test]
async fn test_many_files_with_low_concurrency_keep_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut inputs = Vec::new();
    for i in 0..20 {
        let path = temp_dir.path().join(format!("{:02}.txt", i));
        std::fs::write(&path, format!("8 (913) 000-00-{:02}", i)).unwrap();
        inputs.push(InputSource::File(path));
    }

    let config = RunSettings::resolve(&TomlConfig::default(), None, Some(3), false);
    let pipeline = ExtractionPipeline::new(LocalStorage::new(), config, Mode::Files, inputs);

    let outcomes = pipeline.extract().await.unwrap();
    let aggregation = pipeline.transform(outcomes).await.unwrap();

    let expected: Vec<String> = (0..20).map(|i| format!("+7(913)000-00-{:02}", i)).collect();
    let actual: Vec<String> = aggregation.phones.iter().map(|p| p.to_string()).collect();
    assert_eq!(actual, expected);
}
