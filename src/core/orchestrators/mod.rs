pub mod extraction_orchestrator;
