//! Request lifecycle and the accept loop.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::{Cause, CompoundCause, WebError};
use crate::http::{head_end, normalize, parse_request, Error as HttpError, HttpRequest};
use crate::lang::Maybe;
use crate::server::config::ServerConfig;
use crate::server::context::RequestContext;
use crate::server::error::Error;
use crate::server::mapper::{default_cause_mapper, CauseMapper};
use crate::server::response::HttpResponse;
use crate::server::table::EndpointTable;

const CONTINUE: &[u8] = b"HTTP/1.1 100 Continue\r\n\r\n";
const MAX_HEAD_SIZE: usize = 64 * 1024;
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Resolves requests against a frozen endpoint table.
///
/// Cheap to clone; every connection task holds its own copy.
#[derive(Clone)]
pub struct Dispatcher {
    table: Arc<EndpointTable>,
    cause_mapper: CauseMapper,
}

impl Dispatcher {
    pub fn new(table: EndpointTable) -> Self {
        Self {
            table: Arc::new(table),
            cause_mapper: Arc::new(default_cause_mapper),
        }
    }

    pub fn with_cause_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&dyn Cause) -> CompoundCause + Send + Sync + 'static,
    {
        self.cause_mapper = Arc::new(mapper);
        self
    }

    pub fn table(&self) -> &EndpointTable {
        &self.table
    }

    /// Produce the response for one fully-buffered request.
    ///
    /// A request no route matches is answered with `404 Not found`. Handler
    /// failures go through the cause mapper.
    pub async fn dispatch(&self, request: HttpRequest) -> HttpResponse {
        let method = request.method;
        let path = normalize(&request.target);

        let route = match self
            .table
            .find_route(method, &path)
            .to_result_with(|| WebError::NotFound.cause())
        {
            Ok(route) => route,
            Err(cause) => {
                debug!("No route for {method} {path}");
                return HttpResponse::from_cause(&cause);
            }
        };

        debug!("{method} {path} -> {route_path}", route_path = route.path());
        let context = RequestContext::new(request, path, route.path());
        match route.invoke(context).await {
            Ok(response) => response,
            Err(cause) => {
                let mapped = (self.cause_mapper)(cause.as_ref());
                warn!("{method} {route_path} failed: {mapped}", route_path = route.path());
                HttpResponse::from_cause(&mapped)
            }
        }
    }
}

/// The HTTP server: a dispatcher behind a TCP accept loop.
pub struct WebServer {
    /// The server configuration.
    pub config: ServerConfig,
    dispatcher: Dispatcher,
}

impl WebServer {
    /// Create a server serving the routes of `table`.
    pub fn new(config: ServerConfig, table: EndpointTable) -> Self {
        Self {
            config,
            dispatcher: Dispatcher::new(table),
        }
    }

    /// Replace the default cause mapper.
    pub fn with_cause_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&dyn Cause) -> CompoundCause + Send + Sync + 'static,
    {
        self.dispatcher = self.dispatcher.with_cause_mapper(mapper);
        self
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Answer one request without a socket.
    pub async fn dispatch(&self, request: HttpRequest) -> HttpResponse {
        self.dispatcher.dispatch(request).await
    }

    /// Bind the configured address and serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = TcpListener::bind(self.config.addr).await?;
        let shutdown = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Cannot listen for Ctrl+C, serving until the process ends: {e}");
                std::future::pending::<()>().await;
            }
            info!("Received Ctrl+C");
        };
        self.serve(listener, shutdown).await
    }

    /// Accept connections on `listener` until `shutdown` completes, then
    /// give in-flight connections [`ServerConfig::shutdown_timeout`] to finish.
    pub async fn serve(
        &self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), Error> {
        info!("Serving on http://{addr}", addr = listener.local_addr()?);
        self.dispatcher.table().print();

        let permits = self.config.max_connections.clamp(1, Semaphore::MAX_PERMITS);
        let semaphore = Arc::new(Semaphore::new(permits));
        let mut tasks = JoinSet::new();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => break,
                accepted = listener.accept() => match accepted {
                    Ok((socket, peer)) => self.spawn_connection(socket, peer, &semaphore, &mut tasks).await,
                    Err(e) => {
                        // Usually transient (fd exhaustion, aborted handshakes).
                        warn!("Accept failed: {e}");
                        tokio::time::sleep(ACCEPT_BACKOFF).await;
                    }
                },
            }

            while tasks.try_join_next().is_some() {}
        }

        let abandoned = drain(&mut tasks, self.config.shutdown_timeout).await;
        if abandoned > 0 {
            warn!("Aborted {abandoned} connections still open at shutdown");
        }
        info!("Server stopped");
        Ok(())
    }

    /// Run the connection in its own task, or answer `503` when at capacity.
    async fn spawn_connection(
        &self,
        mut socket: TcpStream,
        peer: SocketAddr,
        semaphore: &Arc<Semaphore>,
        tasks: &mut JoinSet<()>,
    ) {
        let Ok(permit) = Arc::clone(semaphore).try_acquire_owned() else {
            warn!("At capacity, turning away {peer}");
            let response = HttpResponse::from_cause(&WebError::ServiceUnavailable.cause());
            if let Err(e) = Self::write_response(&mut socket, response).await {
                debug!("Could not answer {peer}: {e}");
            }
            return;
        };

        let dispatcher = self.dispatcher.clone();
        let config = self.config.clone();
        tasks.spawn(async move {
            let _permit = permit;
            if let Err(e) = Self::handle_connection(&mut socket, &dispatcher, &config).await {
                warn!("Connection from {peer} failed: {e}");
            }
        });
    }

    /// Serve a single request on `socket`.
    ///
    /// Malformed and oversized requests are answered before the error is
    /// returned. A peer that closes without sending anything is not an error.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        dispatcher: &Dispatcher,
        config: &ServerConfig,
    ) -> Result<(), Error> {
        let request = match Self::read_request(socket, config).await {
            Ok(Maybe::Present(request)) => request,
            Ok(Maybe::Absent) => return Ok(()),
            Err(Error::ParseError(e)) => {
                let cause = CompoundCause::from_error(WebError::BadRequest, &e);
                Self::write_response(socket, HttpResponse::from_cause(&cause)).await?;
                return Err(Error::ParseError(e));
            }
            Err(Error::PayloadTooLarge(length)) => {
                let response = HttpResponse::from_cause(&WebError::PayloadTooLarge.cause());
                Self::write_response(socket, response).await?;
                return Err(Error::PayloadTooLarge(length));
            }
            Err(e) => return Err(e),
        };

        let response = dispatcher.dispatch(request).await;
        Self::write_response(socket, response).await
    }

    async fn write_response(
        socket: &mut (impl AsyncWrite + Unpin),
        response: HttpResponse,
    ) -> Result<(), Error> {
        let response = response.with_header("Connection", "close");
        socket.write_all(&response.to_bytes()).await?;
        socket.flush().await?;
        Ok(())
    }

    /// Read one request: the head up to the blank line, then exactly
    /// `Content-Length` bytes of body.
    async fn read_request(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        config: &ServerConfig,
    ) -> Result<Maybe<HttpRequest>, Error> {
        let mut buf = Vec::with_capacity(config.read_buffer_size);
        let mut chunk = vec![0; config.read_buffer_size.max(1)];

        let head_len = loop {
            if let Maybe::Present(end) = head_end(&buf) {
                break end;
            }
            if buf.len() > MAX_HEAD_SIZE {
                return Err(HttpError::HeadTooLarge(buf.len()).into());
            }

            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                if buf.is_empty() {
                    return Ok(Maybe::empty());
                }
                return Err(HttpError::IncompleteHead.into());
            }
            buf.extend_from_slice(&chunk[..n]);
        };

        let mut request = parse_request(&buf[..head_len])?;
        let length = request.content_length()?.or(0);
        if length > config.max_content_length {
            return Err(Error::PayloadTooLarge(length));
        }

        if request.expects_continue() && buf.len() < head_len + length {
            socket.write_all(CONTINUE).await?;
        }

        while buf.len() < head_len + length {
            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                return Err(Error::ConnectionClosed(buf.len()));
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        request.body = buf[head_len..head_len + length].to_vec();
        Ok(Maybe::present(request))
    }
}

/// Wait up to `timeout` for `tasks` to finish, then abort the rest.
///
/// Returns how many tasks had to be aborted.
pub(crate) async fn drain(tasks: &mut JoinSet<()>, timeout: Duration) -> usize {
    let finished = tokio::time::timeout(timeout, async {
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                error!("Connection task failed: {e}");
            }
        }
    })
    .await;

    if finished.is_ok() {
        return 0;
    }
    let abandoned = tasks.len();
    tasks.shutdown().await;
    abandoned
}
