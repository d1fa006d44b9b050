use std::io::{BufRead, Write};

use tracing::debug;

use crate::domain::{PlatformFilter, SearchRequest, Vacancy};
use crate::errors::{VacancyError, VacancyResult};
use crate::services::{SearchResult, SearchService};
use crate::storage::traits::VacancyRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitPlatformChoice,
    DisplayFiltered(PlatformFilter),
    AwaitNextPage(PlatformFilter),
    Terminal,
}

/// Interactive session: asks for the search, fetches, then pages through results
pub struct Presenter<'a, R: VacancyRepository, I: BufRead, O: Write> {
    service: &'a SearchService<R>,
    input: I,
    output: O,
    request: Option<SearchRequest>,
    result: SearchResult,
}

impl<'a, R: VacancyRepository, I: BufRead, O: Write> Presenter<'a, R, I, O> {
    pub fn new(service: &'a SearchService<R>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
            request: None,
            result: SearchResult::default(),
        }
    }

    pub fn run(&mut self) -> VacancyResult<()> {
        let request = self.read_request()?;
        self.load_page(request)?;

        let mut state = State::AwaitPlatformChoice;
        while state != State::Terminal {
            state = self.step(state)?;
        }

        Ok(())
    }

    fn step(&mut self, state: State) -> VacancyResult<State> {
        debug!(?state, "Presenter step");

        match state {
            State::AwaitPlatformChoice => {
                let Some(choice) =
                    self.prompt("Choose platform (1 - HH, 2 - SuperJob, 3 - both): ")?
                else {
                    return Ok(State::Terminal);
                };

                match PlatformFilter::from_choice(&choice) {
                    Some(filter) => Ok(State::DisplayFiltered(filter)),
                    None => {
                        writeln!(self.output, "Please enter 1, 2 or 3.")?;
                        Ok(State::AwaitPlatformChoice)
                    }
                }
            }
            State::DisplayFiltered(filter) => {
                self.display(filter)?;
                Ok(State::AwaitNextPage(filter))
            }
            State::AwaitNextPage(filter) => {
                let answer = self.prompt("Go to the next page? (y/n) ")?;
                if !answer.is_some_and(|a| a.eq_ignore_ascii_case("y")) {
                    return Ok(State::Terminal);
                }

                let next = match &self.request {
                    Some(request) => request.next_page(),
                    None => return Ok(State::Terminal),
                };
                self.load_page(next)?;
                Ok(State::DisplayFiltered(filter))
            }
            State::Terminal => Ok(State::Terminal),
        }
    }

    fn read_request(&mut self) -> VacancyResult<SearchRequest> {
        let term = self
            .prompt("Enter a job title to search: ")?
            .ok_or_else(|| VacancyError::InvalidInput("No search term given".to_string()))?;

        let page_size = self.prompt_number("Number of vacancies per page: ")?;
        let page = self.prompt_number("Page number to start from: ")?;

        SearchRequest::new(term, page, page_size)
    }

    fn load_page(&mut self, request: SearchRequest) -> VacancyResult<()> {
        writeln!(self.output, "Searching page {}...", request.page)?;

        let result = self.service.fetch_and_save(&request)?;

        let per_platform: Vec<String> = result
            .counts
            .iter()
            .map(|(platform, count)| format!("{}: {}", platform, count))
            .collect();
        let mut summary = format!("Found {}", result.vacancies.len());
        if !per_platform.is_empty() {
            summary.push_str(&format!(" ({})", per_platform.join(", ")));
        }
        writeln!(
            self.output,
            "{}. Saved to {}",
            summary,
            self.service.output_location()
        )?;

        self.request = Some(request);
        self.result = result;
        Ok(())
    }

    fn display(&mut self, filter: PlatformFilter) -> VacancyResult<()> {
        let selected = filter_vacancies(&self.result.vacancies, filter);

        if selected.is_empty() {
            writeln!(self.output, "\nNo vacancies found.\n")?;
            return Ok(());
        }

        for vacancy in selected {
            writeln!(self.output, "\n{}\n", vacancy.format())?;
        }

        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` once input is exhausted
    fn prompt(&mut self, message: &str) -> VacancyResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn prompt_number(&mut self, message: &str) -> VacancyResult<u32> {
        let raw = self
            .prompt(message)?
            .ok_or_else(|| VacancyError::InvalidInput("Input ended unexpectedly".to_string()))?;

        raw.parse()
            .map_err(|_| VacancyError::InvalidInput(format!("'{}' is not a valid number", raw)))
    }
}

pub fn filter_vacancies(vacancies: &[Vacancy], filter: PlatformFilter) -> Vec<&Vacancy> {
    vacancies
        .iter()
        .filter(|v| filter.matches(v.platform))
        .collect()
}
