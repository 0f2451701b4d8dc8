use restaurant_hours::{
    parse_records, rank_restaurants, read_records, summarize, Criteria, HoursError, OpeningHours, Record,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn register() -> Vec<Record> {
    vec![
        Record::from_iter(["512714", "KEIKYÄN RAVINTOLA", " 32740", " SASTAMALA", " Ma-Pe 10:00-16:30", " 61.28464759999999", " 22.6969689"]),
        Record::from_iter(["513127", "KEMINMAAN RAVINTOLA", " 94400", " KEMINMAA", " Ma-Pe 10:00-18:00", " 65.8010911", " 24.5473615"]),
        Record::from_iter(["513100", "KEMIN RAVINTOLA", " 94100", " KEMI", " Ma-Pe 10:00-16:30", " 65.7367598", " 24.567006"]),
        Record::from_iter(["506002", "HUMPPILAN RAVINTOLA", "31640", "HUMPPILA", "Ma-To 09:00-16:00, Pe 09:00-16:30", "60.92403669999999", "23.3690638"]),
    ]
}

#[test]
fn test_restaurants_sorted() {
    let ranked = rank_restaurants(&register()).unwrap();
    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked.get(0), Some(&OpeningHours::new("KEMINMAAN RAVINTOLA", 40)));
    assert_eq!(ranked.get(1), Some(&OpeningHours::new("HUMPPILAN RAVINTOLA", 35)));
    assert_eq!(ranked.get(2), Some(&OpeningHours::new("KEIKYÄN RAVINTOLA", 30)));
    assert_eq!(ranked.get(3), Some(&OpeningHours::new("KEMIN RAVINTOLA", 30)));
}

#[test]
fn test_sorted_descending() {
    let ranked = rank_restaurants(&register()).unwrap();
    let hours: Vec<u32> = ranked.iter().map(OpeningHours::hours).collect();
    assert!(hours.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_register_file_end_to_end() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "512714;KEIKYÄN RAVINTOLA; 32740; SASTAMALA; Ma-Pe 10:00-16:30; 61.28; 22.69").unwrap();
    writeln!(file, "513127;KEMINMAAN RAVINTOLA; 94400; KEMINMAA; Ma-Pe 10:00-18:00; 65.80; 24.54").unwrap();
    writeln!(file, "513100;KEMIN RAVINTOLA; 94100; KEMI; Ma-Pe 10:00-16:30; 65.73; 24.56").unwrap();
    writeln!(file, "506002;HUMPPILAN RAVINTOLA;31640;HUMPPILA;Ma-To 09:00-16:00, Pe 09:00-16:30;60.92;23.36").unwrap();

    let records = read_records(file.path(), &Criteria::default()).unwrap();
    let summary = summarize(&rank_restaurants(&records).unwrap()).unwrap();
    assert_eq!(summary.most_open, "KEMINMAAN RAVINTOLA #1 open 35 hours per week");
    assert_eq!(summary.least_open, "KEMIN RAVINTOLA #2 open 30 hours per week");
}

#[test]
fn test_empty_register() {
    let records = parse_records("\n\n", &Criteria::default());
    assert!(records.is_empty());
    let ranked = rank_restaurants(&records).unwrap();
    assert!(matches!(summarize(&ranked), Err(HoursError::PresenterError(_))));
}
