//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Discretization](#discretization)
//! - [Time stepping](#time-stepping)
//! - [Stability](#stability)
//!
//! # Background
//! The one-dimensional time-dependent Schrödinger equation (TDSE) reads
//! ```text
//!   ∂ψ       ħ² ∂²ψ
//! iħ -- = - --- --- + V(x) ψ = H ψ
//!   ∂t      2 m ∂x²
//! ```
//! for a wavefunction *ψ*(*x*, *t*), particle mass *m*, and (conservative)
//! potential *V*(*x*). Since *H* is Hermitian, exact time evolution
//! *ψ*(*t* + *τ*) = exp(-*i* *H* *τ* / *ħ*) *ψ*(*t*) is unitary and the total
//! probability ∫ |*ψ*|² d*x* is conserved. How well a numerical scheme respects
//! this conservation is the primary check on its output here.
//!
//! # Discretization
//! Space is sampled at *N* evenly spaced points spanning [-*L*/2, *L*/2]
//! (endpoints included), so that
//! ```text
//! x[i] = -L/2 + i h, i ∊ {0, ..., N - 1}
//! h = L / (N - 1)
//! ```
//! and the second derivative is replaced by the three-point stencil
//! ```text
//! ∂²ψ       ψ[i - 1] - 2 ψ[i] + ψ[i + 1]
//! --- [i] ≈ ----------------------------
//! ∂x²                   h²
//! ```
//! This turns *H* into the *N*×*N* matrix
//! ```text
//! H = c (I{-1} - 2 I{0} + I{+1}) + V
//! c = -ħ² / (2 m h²)
//! ```
//! where *I*{*k*} is the matrix with ones on the *k*-th diagonal and zeros
//! elsewhere. Periodic boundary conditions are imposed by additionally setting
//! the corner elements *H*[0, *N* - 1] = *H*[*N* - 1, 0] = *c*, making the last
//! grid point a neighbor of the first. The potential is diagonal and takes the
//! value 1 at each listed grid index (an index listed *n* times receives *n*).
//!
//! The grid requires *N* ≥ 3: for *N* = 2 both corner elements coincide with
//! the off-diagonal ones and the stencil no longer describes a ring.
//!
//! # Time stepping
//! Both schemes advance the discretized state vector by a fixed matrix *A*,
//! built once:
//! ```text
//! ψ[:, j + 1] = A ψ[:, j]
//! ```
//! The explicit forward-time, centered-space (FTCS) scheme takes a single Euler
//! step,
//! ```text
//! A = I - i τ H / ħ
//! ```
//! while the implicit Crank-Nicolson scheme averages explicit and implicit
//! Euler steps, which amounts to the Cayley form
//! ```text
//! A = (I + i τ H / 2ħ)⁻¹ (I - i τ H / 2ħ)
//! ```
//! FTCS is first-order accurate in *τ* and Crank-Nicolson second-order; both
//! are second-order in *h*.
//!
//! # Stability
//! A fixed propagator is stable when its spectral radius
//! *ρ*(*A*) = max |*λ*(*A*)| is no greater than 1. If *λ* is a (real)
//! eigenvalue of *H*, the corresponding eigenvalues of the two propagators are
//! ```text
//! FTCS:            1 - i τ λ / ħ               |·| = √(1 + (τ λ / ħ)²)
//!
//!                  1 - i τ λ / 2ħ
//! Crank-Nicolson:  --------------              |·| = 1
//!                  1 + i τ λ / 2ħ
//! ```
//! FTCS is therefore unstable for every *τ* > 0 (the radius exceeds 1 by about
//! (*τ* *λ*<sub>max</sub> / *ħ*)² / 2), with total probability growing
//! geometrically; it remains usable only for time steps small enough that this
//! growth is negligible over the whole run. Crank-Nicolson is unitary, hence
//! unconditionally stable and probability-conserving up to round-off.
//!
//! For the periodic stencil with no potential, the eigenvalues of *H* are
//! *c* (2 cos(2π*k*/*N*) - 2), so that |*λ*|<sub>max</sub> = 4 |*c*| when *N* is
//! even.
