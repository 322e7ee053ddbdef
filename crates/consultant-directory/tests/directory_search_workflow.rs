//! End-to-end listing-page sessions driven through the public API: filter
//! controls on the controller, explicit pulls of the query spec, and searches
//! against a loaded directory.

use consultant_directory::config::DirectoryConfig;
use consultant_directory::directory::seed;
use consultant_directory::directory::{
    DirectoryImporter, DirectoryService, FilterStateController, QueryExecutor, RecordStore,
};

fn service() -> DirectoryService {
    let service = DirectoryService::new(&DirectoryConfig::default());
    service
        .load(seed::sample_entries())
        .expect("seed directory loads");
    service
}

#[test]
fn listing_page_session_applies_and_clears_filters() {
    let service = service();
    let mut controller = FilterStateController::new(service.rate_bounds());

    let initial = service
        .search(&controller.current_query_spec())
        .expect("initial listing");
    assert_eq!(initial.summary, "5 consultants found");

    controller.toggle_tag("Workforce Development");
    controller.set_remote_only(true);
    let filtered = service
        .search(&controller.current_query_spec())
        .expect("filtered listing");
    assert_eq!(filtered.names(), vec!["Jane Smith", "Robert Johnson"]);

    controller.set_text("vancouver");
    let narrowed = service
        .search(&controller.current_query_spec())
        .expect("narrowed listing");
    assert_eq!(narrowed.names(), vec!["Robert Johnson"]);
    assert_eq!(narrowed.summary, "1 consultant found");

    controller.reset();
    let cleared = service
        .search(&controller.current_query_spec())
        .expect("cleared listing");
    assert_eq!(cleared, initial);
}

#[test]
fn rejected_rate_change_keeps_the_applied_range() {
    let service = service();
    let mut controller = FilterStateController::new(service.rate_bounds());
    controller
        .set_rate_range(130.0, 160.0)
        .expect("valid range accepted");

    assert!(controller.set_rate_range(10.0, 5.0).is_err());

    let outcome = service
        .search(&controller.current_query_spec())
        .expect("search succeeds");
    assert_eq!(
        outcome.names(),
        vec!["Jane Smith", "Michael Chen", "Emma Rodriguez"]
    );
}

#[test]
fn csv_export_loads_into_the_store_and_answers_queries() {
    let csv = "\
id,name,title,location,description,remote,rate,rate_type,expertise,availability
1,Jane Smith,Senior HR Consultant,\"Toronto, Ontario\",Employment strategy specialist,true,150,hourly,Employment Strategy;Workforce Development,Part-time
2,Sarah Williams,Workforce Development Expert,\"Montreal, Quebec\",Public sector background,false,175,hourly,Workforce Development;Career Coaching,Contract
3,Lee Park,Coach,\"Regina, SK\",Leadership coaching,true,90,daily,HR Transformation,Full-time
";
    let entries = DirectoryImporter::from_csv_reader(csv.as_bytes()).expect("csv imports");

    let mut store = RecordStore::new();
    store.load(entries).expect("entries are valid");
    let snapshot = store.snapshot();

    let compiler = consultant_directory::directory::PredicateCompiler::new(
        seed::expertise_vocabulary(),
    );
    let spec = consultant_directory::directory::QuerySpec::match_all(Default::default())
        .with_tags(["Workforce Development", "HR Transformation"]);
    let predicate = compiler.compile(&spec).expect("spec compiles");
    let results = QueryExecutor.execute(&snapshot, &predicate);

    let names: Vec<&str> = results.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Smith", "Sarah Williams"]);
}

#[test]
fn json_export_round_trips_the_sample_directory() {
    let json = serde_json::to_vec(&seed::sample_entries()).expect("entries serialize");

    let entries = DirectoryImporter::from_json_reader(json.as_slice()).expect("json imports");

    assert_eq!(entries, seed::sample_entries());
}

#[test]
fn json_export_tags_match_vocabulary_filters_like_csv() {
    let json = r#"[{
        "id": 11,
        "name": "Ana Souza",
        "title": "Career Coach",
        "location": "Halifax, NS",
        "description": "Coaching for career changers",
        "remote": true,
        "rate": 95.0,
        "expertise_tags": ["Workforce  Development "],
        "availability": "Contract"
    }]"#;
    let entries = DirectoryImporter::from_json_reader(json.as_bytes()).expect("json imports");
    let service = DirectoryService::new(&DirectoryConfig::default());
    service.load(entries).expect("entries are valid");

    let spec = service
        .default_query()
        .with_tags(["Workforce Development"]);
    let outcome = service.search(&spec).expect("search succeeds");

    assert_eq!(outcome.names(), vec!["Ana Souza"]);
}

#[test]
fn unsupported_export_extension_is_rejected() {
    let err = DirectoryImporter::from_path("directory.xlsx").unwrap_err();
    assert!(err.to_string().contains("directory.xlsx"));
}
